use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Game row without relations.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GameDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub release_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub stock: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Genre, developer, platform or tag row.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReferenceDto {
    pub id: i32,
    pub name: String,
}

/// Related row reduced to its name, as returned by the single-game endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReferenceNameDto {
    pub name: String,
}

/// Game together with its full related rows.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GameWithRelationsDto {
    #[serde(flatten)]
    pub game: GameDto,
    pub genres: Vec<ReferenceDto>,
    pub developers: Vec<ReferenceDto>,
    pub platforms: Vec<ReferenceDto>,
    pub tags: Vec<ReferenceDto>,
}

/// Game together with the names of its related rows.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GameDetailDto {
    #[serde(flatten)]
    pub game: GameDto,
    pub genres: Vec<ReferenceNameDto>,
    pub developers: Vec<ReferenceNameDto>,
    pub platforms: Vec<ReferenceNameDto>,
    pub tags: Vec<ReferenceNameDto>,
}

/// Payload of the admin create endpoint.
///
/// Relation lists hold names of existing rows; names without a matching row are ignored.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateGameDto {
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub developers: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub release_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub stock: Option<i32>,
}

/// Payload of the admin edit endpoint.
///
/// Every field is optional. Absent scalar fields are left untouched, an absent relation
/// list leaves that relation untouched, and a present list (even empty) replaces it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateGameDto {
    pub name: Option<String>,
    pub genres: Option<Vec<String>>,
    pub developers: Option<Vec<String>>,
    pub platforms: Option<Vec<String>>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub release_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub stock: Option<i32>,
}
