pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_cart_table;
mod m20260105_000003_create_game_table;
mod m20260105_000004_create_genre_table;
mod m20260105_000005_create_developer_table;
mod m20260105_000006_create_platform_table;
mod m20260105_000007_create_tag_table;
mod m20260105_000008_create_game_genre_table;
mod m20260105_000009_create_game_developer_table;
mod m20260105_000010_create_game_platform_table;
mod m20260105_000011_create_game_tag_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_cart_table::Migration),
            Box::new(m20260105_000003_create_game_table::Migration),
            Box::new(m20260105_000004_create_genre_table::Migration),
            Box::new(m20260105_000005_create_developer_table::Migration),
            Box::new(m20260105_000006_create_platform_table::Migration),
            Box::new(m20260105_000007_create_tag_table::Migration),
            Box::new(m20260105_000008_create_game_genre_table::Migration),
            Box::new(m20260105_000009_create_game_developer_table::Migration),
            Box::new(m20260105_000010_create_game_platform_table::Migration),
            Box::new(m20260105_000011_create_game_tag_table::Migration),
        ]
    }
}
