use super::*;

/// Tests finding an existing user.
///
/// Expected: Ok(Some) with the stored profile
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .nickname("Alice")
        .status("online")
        .signature("hello there")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.get_by_id(stored.id).await?.unwrap();

    assert_eq!(user.id, stored.id);
    assert_eq!(user.nickname, "Alice");
    assert!(user.is_online());
    assert_eq!(user.signature.as_deref(), Some("hello there"));

    Ok(())
}

/// Tests looking up an id with no user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.get_by_id(999).await?.is_none());

    Ok(())
}
