use super::*;

/// Tests finding an existing user by id.
///
/// Expected: Ok(Some(User)) with the stored admin flag
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .username("alice")
        .admin(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(admin.id).await?.unwrap();

    assert_eq!(user.id, admin.id);
    assert_eq!(user.username, "alice");
    assert!(user.is_admin);

    Ok(())
}

/// Tests finding a user id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(1).await?;

    assert!(result.is_none());

    Ok(())
}
