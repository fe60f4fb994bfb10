use super::*;
use sea_orm::SqlErr;

/// Tests inserting a game with scalar fields.
///
/// Expected: Ok(Game) with the provided values and matching timestamps
#[tokio::test]
async fn inserts_game_with_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db.clone());
    let game = repo
        .insert(NewGame {
            name: "Chess".to_string(),
            fields: GameFields {
                description: Some("Classic board game".to_string()),
                price: Some(4.5),
                stock: Some(3),
                ..Default::default()
            },
        })
        .await?;

    assert_eq!(game.name, "Chess");
    assert_eq!(game.description.as_deref(), Some("Classic board game"));
    assert_eq!(game.price, Some(4.5));
    assert_eq!(game.stock, Some(3));
    assert_eq!(game.image_url, None);
    assert_eq!(game.created_at, game.updated_at);

    let stored = repo.find_by_name("Chess").await?;
    assert_eq!(stored.map(|g| g.id), Some(game.id));

    Ok(())
}

/// Tests that the unique index on the name rejects a duplicate insert.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game(db, "Chess").await?;

    let repo = GameRepository::new(db.clone());
    let result = repo
        .insert(NewGame {
            name: "Chess".to_string(),
            fields: GameFields::default(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that an insert inside a transaction is discarded when the transaction is dropped.
///
/// Expected: no game row after the transaction is dropped without commit
#[tokio::test]
async fn dropped_transaction_discards_insert() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let catalog = SeaCatalog::new(db);
    let txn = catalog.begin().await?;
    txn.insert(NewGame {
        name: "Chess".to_string(),
        fields: GameFields::default(),
    })
    .await?;
    drop(txn);

    assert_eq!(entity::prelude::Game::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a committed transaction persists its insert.
///
/// Expected: one game row after commit
#[tokio::test]
async fn committed_transaction_persists_insert() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let catalog = SeaCatalog::new(db);
    let txn = catalog.begin().await?;
    txn.insert(NewGame {
        name: "Chess".to_string(),
        fields: GameFields::default(),
    })
    .await?;
    txn.commit().await?;

    assert_eq!(entity::prelude::Game::find().count(db).await?, 1);

    Ok(())
}
