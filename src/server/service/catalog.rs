use sea_orm::DatabaseConnection;

use crate::server::{
    data::game::GameRepository,
    error::AppError,
    model::game::{Game, GameWithRelationNames, GameWithRelations},
};

/// Read-only catalog queries.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every game without relations
    pub async fn list_all(&self) -> Result<Vec<Game>, AppError> {
        let repo = GameRepository::new(self.db.clone());

        Ok(repo.get_all().await?)
    }

    /// Gets the games tagged with the genre named exactly `category`, with all relations
    pub async fn list_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<GameWithRelations>, AppError> {
        let repo = GameRepository::new(self.db.clone());

        let games = repo.get_by_genre_name(category).await?;

        let mut result = Vec::with_capacity(games.len());
        for game in games {
            result.push(repo.with_relations(game).await?);
        }

        Ok(result)
    }

    /// Gets the games whose name contains `fragment`, with all relations
    pub async fn search(&self, fragment: &str) -> Result<Vec<GameWithRelations>, AppError> {
        let repo = GameRepository::new(self.db.clone());

        let games = repo.search_by_name(fragment).await?;

        let mut result = Vec::with_capacity(games.len());
        for game in games {
            result.push(repo.with_relations(game).await?);
        }

        Ok(result)
    }

    /// Gets a single game with the names of its related rows
    pub async fn get_by_id(&self, id: i32) -> Result<Option<GameWithRelationNames>, AppError> {
        let repo = GameRepository::new(self.db.clone());

        Ok(repo.get_with_relation_names(id).await?)
    }
}
