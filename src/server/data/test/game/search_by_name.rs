use super::*;

/// Tests substring search on the game name.
///
/// Verifies that the fragment may appear anywhere in the name.
///
/// Expected: Ok with games containing the fragment
#[tokio::test]
async fn matches_fragment_anywhere_in_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game(db, "Chess").await?;
    factory::create_game(db, "Chess 960").await?;
    factory::create_game(db, "Checkers").await?;

    let repo = GameRepository::new(db.clone());

    let names: Vec<String> = repo
        .search_by_name("ess")
        .await?
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["Chess", "Chess 960"]);

    let names: Vec<String> = repo
        .search_by_name("960")
        .await?
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["Chess 960"]);

    Ok(())
}

/// Tests that an empty fragment matches every game.
///
/// Expected: Ok with all games
#[tokio::test]
async fn empty_fragment_matches_everything() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game(db, "Chess").await?;
    factory::create_game(db, "Go").await?;

    let repo = GameRepository::new(db.clone());
    let games = repo.search_by_name("").await?;

    assert_eq!(games.len(), 2);

    Ok(())
}
