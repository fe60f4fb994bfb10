//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a game linked to one freshly created genre, developer, platform and tag.
///
/// The reference rows are named after the game (`"<game> Genre"`, `"<game> Developer"`, ...)
/// so several calls in one test never collide on the unique name columns.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Name of the game to create
///
/// # Returns
/// - `Ok((game, genre, developer, platform, tag))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_game_with_relations(
    db: &DatabaseConnection,
    name: &str,
) -> Result<
    (
        entity::game::Model,
        entity::genre::Model,
        entity::developer::Model,
        entity::platform::Model,
        entity::tag::Model,
    ),
    DbErr,
> {
    let game = crate::factory::game::GameFactory::new(db)
        .name(name)
        .build()
        .await?;

    let genre = crate::factory::create_genre(db, &format!("{} Genre", name)).await?;
    let developer = crate::factory::create_developer(db, &format!("{} Developer", name)).await?;
    let platform = crate::factory::create_platform(db, &format!("{} Platform", name)).await?;
    let tag = crate::factory::create_tag(db, &format!("{} Tag", name)).await?;

    crate::factory::link_genre(db, game.id, genre.id).await?;
    crate::factory::link_developer(db, game.id, developer.id).await?;
    crate::factory::link_platform(db, game.id, platform.id).await?;
    crate::factory::link_tag(db, game.id, tag.id).await?;

    Ok((game, genre, developer, platform, tag))
}
