use super::*;

/// Tests looking up an existing game by id.
///
/// Expected: Ok(Some(Game)) with the stored name
#[tokio::test]
async fn finds_existing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chess = factory::create_game(db, "Chess").await?;
    factory::create_game(db, "Go").await?;

    let repo = GameRepository::new(db.clone());
    let game = repo.find_by_id(chess.id).await?;

    assert_eq!(game.map(|g| g.name), Some("Chess".to_string()));

    Ok(())
}

/// Tests looking up an id no game has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db.clone());
    let game = repo.find_by_id(404).await?;

    assert!(game.is_none());

    Ok(())
}
