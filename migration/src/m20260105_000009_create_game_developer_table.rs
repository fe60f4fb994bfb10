use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260105_000003_create_game_table::Game, m20260105_000005_create_developer_table::Developer};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameDeveloper::Table)
                    .if_not_exists()
                    .col(integer(GameDeveloper::GameId))
                    .col(integer(GameDeveloper::DeveloperId))
                    .primary_key(
                        Index::create()
                            .col(GameDeveloper::GameId)
                            .col(GameDeveloper::DeveloperId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_developer_game_id")
                            .from(GameDeveloper::Table, GameDeveloper::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_developer_developer_id")
                            .from(GameDeveloper::Table, GameDeveloper::DeveloperId)
                            .to(Developer::Table, Developer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameDeveloper::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameDeveloper {
    Table,
    GameId,
    DeveloperId,
}
