use super::*;

/// Tests deleting a game together with its join rows.
///
/// Verifies that the game and every association row are removed while the reference
/// rows themselves remain.
///
/// Expected: Ok(1) with no join rows left
#[tokio::test]
async fn deletes_game_and_join_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, ..) = factory::helpers::create_game_with_relations(db, "Chess").await?;

    let repo = GameRepository::new(db.clone());
    let deleted = repo.delete(game.id).await?;

    assert_eq!(deleted, 1);
    assert_eq!(entity::prelude::Game::find().count(db).await?, 0);
    assert_eq!(entity::prelude::GameGenre::find().count(db).await?, 0);
    assert_eq!(entity::prelude::GameDeveloper::find().count(db).await?, 0);
    assert_eq!(entity::prelude::GamePlatform::find().count(db).await?, 0);
    assert_eq!(entity::prelude::GameTag::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Genre::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a game id that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game(db, "Chess").await?;

    let repo = GameRepository::new(db.clone());
    let deleted = repo.delete(999).await?;

    assert_eq!(deleted, 0);
    assert_eq!(entity::prelude::Game::find().count(db).await?, 1);

    Ok(())
}
