use super::*;

/// Tests batch lookup with a mix of known and unknown ids.
///
/// Verifies that unknown ids are skipped and results are ordered by id.
///
/// Expected: Ok with only the existing users
#[tokio::test]
async fn skips_unknown_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_by_ids(&[b.id, 999, a.id]).await?;
    let ids: Vec<_> = users.iter().map(|u| u.id).collect();

    assert_eq!(ids, vec![a.id, b.id]);

    Ok(())
}

/// Tests batch lookup with no ids.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_empty_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.get_by_ids(&[]).await?.is_empty());

    Ok(())
}
