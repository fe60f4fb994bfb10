use super::*;

/// Tests listing every game in id order.
///
/// Verifies that all games are returned without filtering, ordered by id, and that
/// relation rows do not affect the result.
///
/// Expected: Ok with games in creation order
#[tokio::test]
async fn returns_all_games_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_game_with_relations(db, "Chess").await?;
    factory::create_game(db, "Go").await?;
    factory::create_game(db, "Shogi").await?;

    let repo = GameRepository::new(db.clone());
    let games = repo.get_all().await?;

    let names: Vec<&str> = games.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Chess", "Go", "Shogi"]);
    assert!(games.windows(2).all(|w| w[0].id < w[1].id));

    Ok(())
}

/// Tests listing games on an empty catalog.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_no_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db.clone());
    let games = repo.get_all().await?;

    assert!(games.is_empty());

    Ok(())
}
