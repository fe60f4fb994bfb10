use super::*;

/// Tests loading a game with the names of its related rows.
///
/// Expected: Ok(Some) with one name per relation
#[tokio::test]
async fn returns_game_with_relation_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, ..) = factory::helpers::create_game_with_relations(db, "Chess").await?;

    let repo = GameRepository::new(db.clone());
    let result = repo.get_with_relation_names(game.id).await?;

    let detail = result.unwrap();
    assert_eq!(detail.game.id, game.id);
    assert_eq!(detail.genres, vec!["Chess Genre".to_string()]);
    assert_eq!(detail.developers, vec!["Chess Developer".to_string()]);
    assert_eq!(detail.platforms, vec!["Chess Platform".to_string()]);
    assert_eq!(detail.tags, vec!["Chess Tag".to_string()]);

    Ok(())
}

/// Tests loading a game that has no relations.
///
/// Expected: Ok(Some) with empty name lists
#[tokio::test]
async fn returns_empty_lists_without_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db, "Go").await?;

    let repo = GameRepository::new(db.clone());
    let detail = repo.get_with_relation_names(game.id).await?.unwrap();

    assert!(detail.genres.is_empty());
    assert!(detail.developers.is_empty());
    assert!(detail.platforms.is_empty());
    assert!(detail.tags.is_empty());

    Ok(())
}

/// Tests loading a game id that does not exist.
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
    let result = repo.get_with_relation_names(999).await?;

    assert!(result.is_none());

    Ok(())
}
