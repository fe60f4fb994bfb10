//! Admin write path for the game catalog.
//!
//! Create, edit and delete run inside one store transaction each, so a failure in any
//! step (including association replacement) leaves the catalog as it was.

use sea_orm::{DbErr, SqlErr};

use crate::server::{
    data::game::{CatalogStore, GameStore, StoreTransaction},
    error::{auth::AuthError, AppError},
    model::{
        game::{CreateGameParams, GameWithRelations, NewGame, UpdateGameParams},
        reference::{ReferenceKind, ResolvedReferences},
        user::User,
    },
};

pub struct GameService<'a, S> {
    store: &'a S,
}

impl<'a, S: CatalogStore> GameService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Creates a game keyed on its trimmed name and links the named reference rows.
    ///
    /// # Returns
    /// - `Ok(GameWithRelations)` - Newly created game with relations loaded
    /// - `Err(AppError::AuthErr)` - Caller is not an admin
    /// - `Err(AppError::BadRequest)` - Name is blank after trimming
    /// - `Err(AppError::Conflict)` - A game with that name already exists
    /// - `Err(AppError::DbErr)` - Database error; nothing is written
    pub async fn create(
        &self,
        user: &User,
        params: CreateGameParams,
    ) -> Result<GameWithRelations, AppError> {
        require_admin(user)?;

        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Game name must not be empty".to_string()));
        }

        let txn = self.store.begin().await?;

        let references = resolve_references(
            &txn,
            Some(params.genres),
            Some(params.developers),
            Some(params.platforms),
        )
        .await?;

        if txn.find_by_name(&name).await?.is_some() {
            return Err(conflict(&name));
        }

        let game = txn
            .insert(NewGame {
                name: name.clone(),
                fields: params.fields,
            })
            .await
            .map_err(|err| map_unique_violation(err, &name))?;

        for (kind, ids) in references.replacements() {
            txn.set_associations(game.id, kind, &ids).await?;
        }

        let game = txn.load_relations(game).await?;
        txn.commit().await?;

        tracing::info!("User {} created game {} ({})", user.id, game.game.id, name);

        Ok(game)
    }

    /// Updates a game's scalar fields and replaces the relation sets present in `params`.
    ///
    /// # Returns
    /// - `Ok(GameWithRelations)` - Updated game with relations loaded
    /// - `Err(AppError::AuthErr)` - Caller is not an admin
    /// - `Err(AppError::BadRequest)` - New name is blank
    /// - `Err(AppError::NotFound)` - No game has that id
    /// - `Err(AppError::Conflict)` - Rename collides with another game
    /// - `Err(AppError::DbErr)` - Database error; every step is rolled back
    pub async fn update(
        &self,
        user: &User,
        params: UpdateGameParams,
    ) -> Result<GameWithRelations, AppError> {
        require_admin(user)?;

        if params.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(AppError::BadRequest("Game name must not be empty".to_string()));
        }

        let txn = self.store.begin().await?;

        if txn.find_by_id(params.id).await?.is_none() {
            return Err(not_found(params.id));
        }

        let references =
            resolve_references(&txn, params.genres, params.developers, params.platforms).await?;

        let new_name = params.name.clone();
        let Some(game) = txn
            .update(params.id, params.name, params.fields)
            .await
            .map_err(|err| map_unique_violation(err, new_name.as_deref().unwrap_or_default()))?
        else {
            return Err(not_found(params.id));
        };

        for (kind, ids) in references.replacements() {
            txn.set_associations(game.id, kind, &ids).await?;
        }

        let game = txn.load_relations(game).await?;
        txn.commit().await?;

        tracing::info!("User {} updated game {}", user.id, game.game.id);

        Ok(game)
    }

    /// Deletes a game and its association rows.
    ///
    /// Succeeds whether or not the game existed.
    pub async fn delete(&self, user: &User, id: i32) -> Result<(), AppError> {
        require_admin(user)?;

        let txn = self.store.begin().await?;
        let deleted = txn.delete(id).await?;
        txn.commit().await?;

        if deleted > 0 {
            tracing::info!("User {} deleted game {}", user.id, id);
        }

        Ok(())
    }
}

fn require_admin(user: &User) -> Result<(), AuthError> {
    if !user.is_admin {
        return Err(AuthError::AdminRequired(user.id));
    }

    Ok(())
}

/// Resolves each present name list to the existing reference rows of that kind.
async fn resolve_references<T: GameStore>(
    store: &T,
    genres: Option<Vec<String>>,
    developers: Option<Vec<String>>,
    platforms: Option<Vec<String>>,
) -> Result<ResolvedReferences, DbErr> {
    let mut resolved = ResolvedReferences::default();

    if let Some(names) = genres {
        resolved.genres = Some(store.find_references(ReferenceKind::Genre, &names).await?);
    }
    if let Some(names) = developers {
        resolved.developers = Some(
            store
                .find_references(ReferenceKind::Developer, &names)
                .await?,
        );
    }
    if let Some(names) = platforms {
        resolved.platforms = Some(
            store
                .find_references(ReferenceKind::Platform, &names)
                .await?,
        );
    }

    Ok(resolved)
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Game {} not found", id))
}

fn conflict(name: &str) -> AppError {
    AppError::Conflict(format!("A game named {} already exists", name))
}

/// Concurrent creates of the same name race past `find_by_name`; the unique index decides.
fn map_unique_violation(err: DbErr, name: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => conflict(name),
        _ => err.into(),
    }
}
