use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260105_000003_create_game_table::Game, m20260105_000004_create_genre_table::Genre};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameGenre::Table)
                    .if_not_exists()
                    .col(integer(GameGenre::GameId))
                    .col(integer(GameGenre::GenreId))
                    .primary_key(
                        Index::create()
                            .col(GameGenre::GameId)
                            .col(GameGenre::GenreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_genre_game_id")
                            .from(GameGenre::Table, GameGenre::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_genre_genre_id")
                            .from(GameGenre::Table, GameGenre::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameGenre::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameGenre {
    Table,
    GameId,
    GenreId,
}
