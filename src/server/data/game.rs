//! Game data repository and the store interface the catalog services run against.
//!
//! The mutation service only sees the [`GameStore`] / [`CatalogStore`] traits, so the
//! reconciliation protocol can be exercised against an in-memory fake. [`SeaCatalog`]
//! and [`GameRepository`] are the SeaORM implementations used by the running server.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::server::model::{
    game::{Game, GameFields, GameWithRelationNames, GameWithRelations, NewGame},
    reference::{Reference, ReferenceKind},
};

/// Operations the catalog mutation service needs from persistent storage.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Returns the existing reference rows of `kind` whose name appears in `names`.
    ///
    /// Names without a matching row are skipped; no row is ever created.
    async fn find_references(
        &self,
        kind: ReferenceKind,
        names: &[String],
    ) -> Result<Vec<Reference>, DbErr>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Game>, DbErr>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Game>, DbErr>;

    async fn insert(&self, game: NewGame) -> Result<Game, DbErr>;

    /// Applies a partial update and returns the updated row, or `None` if no row has `id`.
    async fn update(
        &self,
        id: i32,
        name: Option<String>,
        fields: GameFields,
    ) -> Result<Option<Game>, DbErr>;

    /// Replaces the game's association set of `kind` with exactly `reference_ids`.
    async fn set_associations(
        &self,
        game_id: i32,
        kind: ReferenceKind,
        reference_ids: &[i32],
    ) -> Result<(), DbErr>;

    async fn load_relations(&self, game: Game) -> Result<GameWithRelations, DbErr>;

    /// Deletes the game and its association rows, returning the number of games removed.
    async fn delete(&self, id: i32) -> Result<u64, DbErr>;
}

/// A [`GameStore`] whose writes become visible only once committed.
///
/// Dropping the transaction without committing rolls every write back.
#[async_trait]
pub trait StoreTransaction: GameStore + Sized {
    async fn commit(self) -> Result<(), DbErr>;
}

/// Entry point for opening transactional store scopes.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    type Transaction: StoreTransaction;

    async fn begin(&self) -> Result<Self::Transaction, DbErr>;
}

/// SeaORM-backed [`CatalogStore`].
pub struct SeaCatalog<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeaCatalog<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogStore for SeaCatalog<'_> {
    type Transaction = GameRepository<DatabaseTransaction>;

    async fn begin(&self) -> Result<Self::Transaction, DbErr> {
        Ok(GameRepository::new(self.db.begin().await?))
    }
}

/// Repository providing database operations for games and their associations.
///
/// Generic over the connection so the same queries run on the pool for reads and on a
/// `DatabaseTransaction` for the admin write path.
pub struct GameRepository<C> {
    db: C,
}

impl<C: ConnectionTrait> GameRepository<C> {
    pub fn new(db: C) -> Self {
        Self { db }
    }

    /// Gets all games ordered by id, without relations.
    pub async fn get_all(&self) -> Result<Vec<Game>, DbErr> {
        let games = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::Id)
            .all(&self.db)
            .await?;

        Ok(games.into_iter().map(Game::from_entity).collect())
    }

    /// Gets the games that have a genre named exactly `genre_name`.
    pub async fn get_by_genre_name(&self, genre_name: &str) -> Result<Vec<Game>, DbErr> {
        let games = entity::prelude::Game::find()
            .inner_join(entity::prelude::Genre)
            .filter(entity::genre::Column::Name.eq(genre_name))
            .order_by_asc(entity::game::Column::Id)
            .all(&self.db)
            .await?;

        Ok(games.into_iter().map(Game::from_entity).collect())
    }

    /// Gets the games whose name contains `fragment` anywhere.
    ///
    /// Uses `LIKE '%fragment%'`, so case sensitivity follows the database default.
    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Game>, DbErr> {
        let games = entity::prelude::Game::find()
            .filter(entity::game::Column::Name.contains(fragment))
            .order_by_asc(entity::game::Column::Id)
            .all(&self.db)
            .await?;

        Ok(games.into_iter().map(Game::from_entity).collect())
    }

    /// Gets a game by id with the names of its related rows.
    ///
    /// # Returns
    /// - `Ok(Some(GameWithRelationNames))` - Game found
    /// - `Ok(None)` - No game with that id
    /// - `Err(DbErr)` - Database error
    pub async fn get_with_relation_names(
        &self,
        id: i32,
    ) -> Result<Option<GameWithRelationNames>, DbErr> {
        let Some(game) = entity::prelude::Game::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let genres = entity::prelude::Genre::find()
            .select_only()
            .column(entity::genre::Column::Name)
            .inner_join(entity::prelude::GameGenre)
            .filter(entity::game_genre::Column::GameId.eq(id))
            .order_by_asc(entity::genre::Column::Name)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;

        let developers = entity::prelude::Developer::find()
            .select_only()
            .column(entity::developer::Column::Name)
            .inner_join(entity::prelude::GameDeveloper)
            .filter(entity::game_developer::Column::GameId.eq(id))
            .order_by_asc(entity::developer::Column::Name)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;

        let platforms = entity::prelude::Platform::find()
            .select_only()
            .column(entity::platform::Column::Name)
            .inner_join(entity::prelude::GamePlatform)
            .filter(entity::game_platform::Column::GameId.eq(id))
            .order_by_asc(entity::platform::Column::Name)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;

        let tags = entity::prelude::Tag::find()
            .select_only()
            .column(entity::tag::Column::Name)
            .inner_join(entity::prelude::GameTag)
            .filter(entity::game_tag::Column::GameId.eq(id))
            .order_by_asc(entity::tag::Column::Name)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;

        Ok(Some(GameWithRelationNames {
            game: Game::from_entity(game),
            genres,
            developers,
            platforms,
            tags,
        }))
    }

    /// Gets the full related rows of `kind` for a game, ordered by name.
    pub async fn get_related(
        &self,
        game_id: i32,
        kind: ReferenceKind,
    ) -> Result<Vec<Reference>, DbErr> {
        let references = match kind {
            ReferenceKind::Genre => entity::prelude::Genre::find()
                .inner_join(entity::prelude::GameGenre)
                .filter(entity::game_genre::Column::GameId.eq(game_id))
                .order_by_asc(entity::genre::Column::Name)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|m| Reference {
                    id: m.id,
                    name: m.name,
                })
                .collect(),
            ReferenceKind::Developer => entity::prelude::Developer::find()
                .inner_join(entity::prelude::GameDeveloper)
                .filter(entity::game_developer::Column::GameId.eq(game_id))
                .order_by_asc(entity::developer::Column::Name)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|m| Reference {
                    id: m.id,
                    name: m.name,
                })
                .collect(),
            ReferenceKind::Platform => entity::prelude::Platform::find()
                .inner_join(entity::prelude::GamePlatform)
                .filter(entity::game_platform::Column::GameId.eq(game_id))
                .order_by_asc(entity::platform::Column::Name)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|m| Reference {
                    id: m.id,
                    name: m.name,
                })
                .collect(),
            ReferenceKind::Tag => entity::prelude::Tag::find()
                .inner_join(entity::prelude::GameTag)
                .filter(entity::game_tag::Column::GameId.eq(game_id))
                .order_by_asc(entity::tag::Column::Name)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|m| Reference {
                    id: m.id,
                    name: m.name,
                })
                .collect(),
        };

        Ok(references)
    }

    /// Loads all four relation sets for a game.
    pub async fn with_relations(&self, game: Game) -> Result<GameWithRelations, DbErr> {
        let genres = self.get_related(game.id, ReferenceKind::Genre).await?;
        let developers = self.get_related(game.id, ReferenceKind::Developer).await?;
        let platforms = self.get_related(game.id, ReferenceKind::Platform).await?;
        let tags = self.get_related(game.id, ReferenceKind::Tag).await?;

        Ok(GameWithRelations {
            game,
            genres,
            developers,
            platforms,
            tags,
        })
    }

    async fn clear_associations(&self, game_id: i32, kind: ReferenceKind) -> Result<(), DbErr> {
        match kind {
            ReferenceKind::Genre => {
                entity::prelude::GameGenre::delete_many()
                    .filter(entity::game_genre::Column::GameId.eq(game_id))
                    .exec(&self.db)
                    .await?;
            }
            ReferenceKind::Developer => {
                entity::prelude::GameDeveloper::delete_many()
                    .filter(entity::game_developer::Column::GameId.eq(game_id))
                    .exec(&self.db)
                    .await?;
            }
            ReferenceKind::Platform => {
                entity::prelude::GamePlatform::delete_many()
                    .filter(entity::game_platform::Column::GameId.eq(game_id))
                    .exec(&self.db)
                    .await?;
            }
            ReferenceKind::Tag => {
                entity::prelude::GameTag::delete_many()
                    .filter(entity::game_tag::Column::GameId.eq(game_id))
                    .exec(&self.db)
                    .await?;
            }
        }

        Ok(())
    }

    async fn insert_association(
        &self,
        game_id: i32,
        kind: ReferenceKind,
        reference_id: i32,
    ) -> Result<(), DbErr> {
        match kind {
            ReferenceKind::Genre => {
                entity::prelude::GameGenre::insert(entity::game_genre::ActiveModel {
                    game_id: ActiveValue::Set(game_id),
                    genre_id: ActiveValue::Set(reference_id),
                })
                .exec_without_returning(&self.db)
                .await?;
            }
            ReferenceKind::Developer => {
                entity::prelude::GameDeveloper::insert(entity::game_developer::ActiveModel {
                    game_id: ActiveValue::Set(game_id),
                    developer_id: ActiveValue::Set(reference_id),
                })
                .exec_without_returning(&self.db)
                .await?;
            }
            ReferenceKind::Platform => {
                entity::prelude::GamePlatform::insert(entity::game_platform::ActiveModel {
                    game_id: ActiveValue::Set(game_id),
                    platform_id: ActiveValue::Set(reference_id),
                })
                .exec_without_returning(&self.db)
                .await?;
            }
            ReferenceKind::Tag => {
                entity::prelude::GameTag::insert(entity::game_tag::ActiveModel {
                    game_id: ActiveValue::Set(game_id),
                    tag_id: ActiveValue::Set(reference_id),
                })
                .exec_without_returning(&self.db)
                .await?;
            }
        }

        Ok(())
    }
}

#[async_trait]
impl<C> GameStore for GameRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_references(
        &self,
        kind: ReferenceKind,
        names: &[String],
    ) -> Result<Vec<Reference>, DbErr> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let names = names.iter().cloned();

        let references = match kind {
            ReferenceKind::Genre => entity::prelude::Genre::find()
                .filter(entity::genre::Column::Name.is_in(names))
                .order_by_asc(entity::genre::Column::Id)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|m| Reference {
                    id: m.id,
                    name: m.name,
                })
                .collect(),
            ReferenceKind::Developer => entity::prelude::Developer::find()
                .filter(entity::developer::Column::Name.is_in(names))
                .order_by_asc(entity::developer::Column::Id)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|m| Reference {
                    id: m.id,
                    name: m.name,
                })
                .collect(),
            ReferenceKind::Platform => entity::prelude::Platform::find()
                .filter(entity::platform::Column::Name.is_in(names))
                .order_by_asc(entity::platform::Column::Id)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|m| Reference {
                    id: m.id,
                    name: m.name,
                })
                .collect(),
            ReferenceKind::Tag => entity::prelude::Tag::find()
                .filter(entity::tag::Column::Name.is_in(names))
                .order_by_asc(entity::tag::Column::Id)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|m| Reference {
                    id: m.id,
                    name: m.name,
                })
                .collect(),
        };

        Ok(references)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Game>, DbErr> {
        let game = entity::prelude::Game::find()
            .filter(entity::game::Column::Name.eq(name))
            .one(&self.db)
            .await?;

        Ok(game.map(Game::from_entity))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Game>, DbErr> {
        let game = entity::prelude::Game::find_by_id(id).one(&self.db).await?;

        Ok(game.map(Game::from_entity))
    }

    async fn insert(&self, game: NewGame) -> Result<Game, DbErr> {
        let now = Utc::now();

        let entity = entity::game::ActiveModel {
            name: ActiveValue::Set(game.name),
            description: ActiveValue::Set(game.fields.description),
            price: ActiveValue::Set(game.fields.price),
            release_date: ActiveValue::Set(game.fields.release_date),
            image_url: ActiveValue::Set(game.fields.image_url),
            stock: ActiveValue::Set(game.fields.stock),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(Game::from_entity(entity))
    }

    async fn update(
        &self,
        id: i32,
        name: Option<String>,
        fields: GameFields,
    ) -> Result<Option<Game>, DbErr> {
        let Some(game) = entity::prelude::Game::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::game::ActiveModel = game.into();
        if let Some(name) = name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = fields.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(price) = fields.price {
            active_model.price = ActiveValue::Set(Some(price));
        }
        if let Some(release_date) = fields.release_date {
            active_model.release_date = ActiveValue::Set(Some(release_date));
        }
        if let Some(image_url) = fields.image_url {
            active_model.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(stock) = fields.stock {
            active_model.stock = ActiveValue::Set(Some(stock));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(&self.db).await?;

        Ok(Some(Game::from_entity(entity)))
    }

    async fn set_associations(
        &self,
        game_id: i32,
        kind: ReferenceKind,
        reference_ids: &[i32],
    ) -> Result<(), DbErr> {
        self.clear_associations(game_id, kind).await?;

        let mut inserted: Vec<i32> = Vec::with_capacity(reference_ids.len());
        for &reference_id in reference_ids {
            // Join tables are keyed on (game_id, reference_id)
            if inserted.contains(&reference_id) {
                continue;
            }
            self.insert_association(game_id, kind, reference_id).await?;
            inserted.push(reference_id);
        }

        Ok(())
    }

    async fn load_relations(&self, game: Game) -> Result<GameWithRelations, DbErr> {
        self.with_relations(game).await
    }

    async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        for kind in [
            ReferenceKind::Genre,
            ReferenceKind::Developer,
            ReferenceKind::Platform,
            ReferenceKind::Tag,
        ] {
            self.clear_associations(id, kind).await?;
        }

        let result = entity::prelude::Game::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected)
    }
}

#[async_trait]
impl StoreTransaction for GameRepository<DatabaseTransaction> {
    async fn commit(self) -> Result<(), DbErr> {
        self.db.commit().await
    }
}
