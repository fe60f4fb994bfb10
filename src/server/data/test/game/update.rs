use super::*;

/// Tests a partial update of scalar fields.
///
/// Verifies that provided fields are written, omitted fields keep their values, and the
/// update timestamp advances.
///
/// Expected: Ok(Some(Game)) with merged values
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::game::GameFactory::new(db)
        .name("Chess")
        .description("Board game")
        .price(10.0)
        .build()
        .await?;

    let repo = GameRepository::new(db.clone());
    let updated = repo
        .update(
            game.id,
            None,
            GameFields {
                price: Some(7.5),
                stock: Some(2),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Chess");
    assert_eq!(updated.description.as_deref(), Some("Board game"));
    assert_eq!(updated.price, Some(7.5));
    assert_eq!(updated.stock, Some(2));
    assert!(updated.updated_at >= game.updated_at);

    Ok(())
}

/// Tests renaming a game.
///
/// Expected: Ok(Some(Game)) with the new name stored as given
#[tokio::test]
async fn renames_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db, "Chess").await?;

    let repo = GameRepository::new(db.clone());
    let updated = repo
        .update(game.id, Some("Chess 960".to_string()), GameFields::default())
        .await?
        .unwrap();

    assert_eq!(updated.name, "Chess 960");
    assert!(repo.find_by_name("Chess").await?.is_none());

    Ok(())
}

/// Tests updating a game id that does not exist.
///
/// Expected: Ok(None) and no rows created
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db.clone());
    let result = repo
        .update(
            42,
            Some("Ghost".to_string()),
            GameFields {
                price: Some(1.0),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Game::find().count(db).await?, 0);

    Ok(())
}
