//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Reference rows are created by name since the catalog
//! matches them by name.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let admin = factory::user::create_admin(&db).await?;
//!     let strategy = factory::create_genre(&db, "Strategy").await?;
//!     let game = factory::game::GameFactory::new(&db)
//!         .name("Chess")
//!         .price(9.99)
//!         .build()
//!         .await?;
//!     factory::link_genre(&db, game.id, strategy.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `game` - Create game entities
//! - `reference` - Create genre/developer/platform/tag rows and link them to games
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod game;
pub mod helpers;
pub mod reference;
pub mod user;

pub use game::create_game;
pub use reference::{
    create_developer, create_genre, create_platform, create_tag, link_developer, link_genre,
    link_platform, link_tag,
};
pub use user::{create_admin, create_user};
