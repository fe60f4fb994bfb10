//! Factories for catalog reference data and the join rows linking it to games.
//!
//! Genres, developers, platforms and tags are read-only from the service's point of
//! view, so tests seed them directly through these helpers.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Creates a genre with the given name.
pub async fn create_genre(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::genre::Model, DbErr> {
    entity::genre::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a developer with the given name.
pub async fn create_developer(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::developer::Model, DbErr> {
    entity::developer::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a platform with the given name.
pub async fn create_platform(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::platform::Model, DbErr> {
    entity::platform::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a tag with the given name.
pub async fn create_tag(db: &DatabaseConnection, name: &str) -> Result<entity::tag::Model, DbErr> {
    entity::tag::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a game to a genre.
pub async fn link_genre(db: &DatabaseConnection, game_id: i32, genre_id: i32) -> Result<(), DbErr> {
    entity::prelude::GameGenre::insert(entity::game_genre::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        genre_id: ActiveValue::Set(genre_id),
    })
    .exec_without_returning(db)
    .await?;

    Ok(())
}

/// Links a game to a developer.
pub async fn link_developer(
    db: &DatabaseConnection,
    game_id: i32,
    developer_id: i32,
) -> Result<(), DbErr> {
    entity::prelude::GameDeveloper::insert(entity::game_developer::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        developer_id: ActiveValue::Set(developer_id),
    })
    .exec_without_returning(db)
    .await?;

    Ok(())
}

/// Links a game to a platform.
pub async fn link_platform(
    db: &DatabaseConnection,
    game_id: i32,
    platform_id: i32,
) -> Result<(), DbErr> {
    entity::prelude::GamePlatform::insert(entity::game_platform::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        platform_id: ActiveValue::Set(platform_id),
    })
    .exec_without_returning(db)
    .await?;

    Ok(())
}

/// Links a game to a tag.
pub async fn link_tag(db: &DatabaseConnection, game_id: i32, tag_id: i32) -> Result<(), DbErr> {
    entity::prelude::GameTag::insert(entity::game_tag::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        tag_id: ActiveValue::Set(tag_id),
    })
    .exec_without_returning(db)
    .await?;

    Ok(())
}
