//! Game domain models and parameters.
//!
//! Provides the game domain model, the shapes it is returned in (bare, with full related
//! rows, or with related names only), and the parameter types the admin create and edit
//! operations are driven by.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::game::{CreateGameDto, GameDetailDto, GameDto, GameWithRelationsDto, UpdateGameDto},
    server::model::reference::{name_dto, Reference},
};

/// Game row without relations.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    /// Natural key used by the create endpoint's find-or-create.
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub release_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub stock: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Converts an entity model to a game domain model at the repository boundary.
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            release_date: entity.release_date,
            image_url: entity.image_url,
            stock: entity.stock,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            release_date: self.release_date,
            image_url: self.image_url,
            stock: self.stock,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Game with its full genre, developer, platform and tag rows.
#[derive(Debug, Clone, PartialEq)]
pub struct GameWithRelations {
    pub game: Game,
    pub genres: Vec<Reference>,
    pub developers: Vec<Reference>,
    pub platforms: Vec<Reference>,
    pub tags: Vec<Reference>,
}

impl GameWithRelations {
    pub fn into_dto(self) -> GameWithRelationsDto {
        GameWithRelationsDto {
            game: self.game.into_dto(),
            genres: self.genres.into_iter().map(Reference::into_dto).collect(),
            developers: self.developers.into_iter().map(Reference::into_dto).collect(),
            platforms: self.platforms.into_iter().map(Reference::into_dto).collect(),
            tags: self.tags.into_iter().map(Reference::into_dto).collect(),
        }
    }
}

/// Game with only the names of its related rows loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct GameWithRelationNames {
    pub game: Game,
    pub genres: Vec<String>,
    pub developers: Vec<String>,
    pub platforms: Vec<String>,
    pub tags: Vec<String>,
}

impl GameWithRelationNames {
    pub fn into_dto(self) -> GameDetailDto {
        GameDetailDto {
            game: self.game.into_dto(),
            genres: self.genres.into_iter().map(name_dto).collect(),
            developers: self.developers.into_iter().map(name_dto).collect(),
            platforms: self.platforms.into_iter().map(name_dto).collect(),
            tags: self.tags.into_iter().map(name_dto).collect(),
        }
    }
}

/// Scalar attributes of a game other than its name.
///
/// On insert `None` stores NULL; on update `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameFields {
    pub description: Option<String>,
    pub price: Option<f64>,
    pub release_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub stock: Option<i32>,
}

/// Row values for inserting a new game.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGame {
    pub name: String,
    pub fields: GameFields,
}

/// Parameters for the admin create operation.
#[derive(Debug, Clone)]
pub struct CreateGameParams {
    pub name: String,
    pub genres: Vec<String>,
    pub developers: Vec<String>,
    pub platforms: Vec<String>,
    pub fields: GameFields,
}

impl CreateGameParams {
    pub fn from_dto(dto: CreateGameDto) -> Self {
        Self {
            name: dto.name,
            genres: dto.genres,
            developers: dto.developers,
            platforms: dto.platforms,
            fields: GameFields {
                description: dto.description,
                price: dto.price,
                release_date: dto.release_date,
                image_url: dto.image_url,
                stock: dto.stock,
            },
        }
    }
}

/// Parameters for the admin edit operation.
///
/// Relation lists are `None` when the payload did not mention them.
#[derive(Debug, Clone, Default)]
pub struct UpdateGameParams {
    pub id: i32,
    pub name: Option<String>,
    pub genres: Option<Vec<String>>,
    pub developers: Option<Vec<String>>,
    pub platforms: Option<Vec<String>>,
    pub fields: GameFields,
}

impl UpdateGameParams {
    pub fn from_dto(id: i32, dto: UpdateGameDto) -> Self {
        Self {
            id,
            name: dto.name,
            genres: dto.genres,
            developers: dto.developers,
            platforms: dto.platforms,
            fields: GameFields {
                description: dto.description,
                price: dto.price,
                release_date: dto.release_date,
                image_url: dto.image_url,
                stock: dto.stock,
            },
        }
    }
}
