use super::*;

/// Tests filtering games by an exact genre name.
///
/// Verifies that only games linked to the named genre are returned and that the full
/// genre set of each game is available through `with_relations`.
///
/// Expected: Ok with the matching game only
#[tokio::test]
async fn returns_games_with_matching_genre() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let strategy = factory::create_genre(db, "Strategy").await?;
    let puzzle = factory::create_genre(db, "Puzzle").await?;
    let chess = factory::create_game(db, "Chess").await?;
    let tetris = factory::create_game(db, "Tetris").await?;
    factory::link_genre(db, chess.id, strategy.id).await?;
    factory::link_genre(db, chess.id, puzzle.id).await?;
    factory::link_genre(db, tetris.id, puzzle.id).await?;

    let repo = GameRepository::new(db.clone());
    let games = repo.get_by_genre_name("Strategy").await?;

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name, "Chess");

    let loaded = repo.with_relations(games[0].clone()).await?;
    let genres: Vec<&str> = loaded.genres.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(genres, vec!["Puzzle", "Strategy"]);

    Ok(())
}

/// Tests that genre matching is exact, not a substring match.
///
/// Expected: Ok(empty vec) for a partial genre name
#[tokio::test]
async fn ignores_partial_genre_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_game_with_relations(db, "Chess").await?;

    let repo = GameRepository::new(db.clone());

    assert!(repo.get_by_genre_name("Chess").await?.is_empty());
    assert_eq!(repo.get_by_genre_name("Chess Genre").await?.len(), 1);

    Ok(())
}
