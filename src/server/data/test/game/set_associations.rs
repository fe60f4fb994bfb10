use super::*;

/// Tests that setting associations replaces the existing set.
///
/// Verifies that a game linked to {A, B} is linked to exactly {B, C} afterwards.
///
/// Expected: Ok with the association set equal to the new ids
#[tokio::test]
async fn replaces_existing_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_genre(db, "A").await?;
    let b = factory::create_genre(db, "B").await?;
    let c = factory::create_genre(db, "C").await?;
    let game = factory::create_game(db, "Chess").await?;
    factory::link_genre(db, game.id, a.id).await?;
    factory::link_genre(db, game.id, b.id).await?;

    let repo = GameRepository::new(db.clone());
    repo.set_associations(game.id, ReferenceKind::Genre, &[b.id, c.id])
        .await?;

    let genres: Vec<String> = repo
        .get_related(game.id, ReferenceKind::Genre)
        .await?
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(genres, vec!["B", "C"]);

    Ok(())
}

/// Tests that an empty id list clears the relation.
///
/// Expected: Ok with no remaining join rows for that relation
#[tokio::test]
async fn empty_ids_clear_relation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, ..) = factory::helpers::create_game_with_relations(db, "Chess").await?;

    let repo = GameRepository::new(db.clone());
    repo.set_associations(game.id, ReferenceKind::Platform, &[])
        .await?;

    assert_eq!(entity::prelude::GamePlatform::find().count(db).await?, 0);
    // Other relations are untouched
    assert_eq!(entity::prelude::GameGenre::find().count(db).await?, 1);

    Ok(())
}

/// Tests that duplicate ids produce a single join row.
///
/// Expected: Ok with one join row
#[tokio::test]
async fn ignores_duplicate_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::create_tag(db, "Multiplayer").await?;
    let game = factory::create_game(db, "Chess").await?;

    let repo = GameRepository::new(db.clone());
    repo.set_associations(game.id, ReferenceKind::Tag, &[tag.id, tag.id])
        .await?;

    assert_eq!(entity::prelude::GameTag::find().count(db).await?, 1);

    Ok(())
}

/// Tests that other games' associations are not affected.
///
/// Expected: Ok with the second game's links intact
#[tokio::test]
async fn leaves_other_games_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (chess, genre, ..) = factory::helpers::create_game_with_relations(db, "Chess").await?;
    let go = factory::create_game(db, "Go").await?;
    factory::link_genre(db, go.id, genre.id).await?;

    let repo = GameRepository::new(db.clone());
    repo.set_associations(chess.id, ReferenceKind::Genre, &[])
        .await?;

    let go_genres = repo.get_related(go.id, ReferenceKind::Genre).await?;
    assert_eq!(go_genres.len(), 1);
    assert_eq!(go_genres[0].id, genre.id);

    Ok(())
}
