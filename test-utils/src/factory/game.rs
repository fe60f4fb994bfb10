//! Game factory for creating test game entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game::GameFactory;
///
/// let game = GameFactory::new(&db)
///     .name("Chess")
///     .price(4.5)
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    price: Option<f64>,
    release_date: Option<NaiveDate>,
    stock: Option<i32>,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Game {id}"` where id is auto-incremented
    /// - description: `None`
    /// - price: `Some(19.99)`
    /// - release_date: `None`
    /// - stock: `Some(10)`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Game {}", id),
            description: None,
            price: Some(19.99),
            release_date: None,
            stock: Some(10),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn release_date(mut self, release_date: NaiveDate) -> Self {
        self.release_date = Some(release_date);
        self
    }

    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Builds and inserts the game entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        let now = Utc::now();
        entity::game::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            release_date: ActiveValue::Set(self.release_date),
            image_url: ActiveValue::Set(None),
            stock: ActiveValue::Set(self.stock),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with the given name and default values for everything else.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Game name
///
/// # Returns
/// - `Ok(entity::game::Model)` - Created game entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_game(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).name(name).build().await
}
