use super::*;

/// Tests listing a user's friendships.
///
/// Verifies that only edges owned by the user are returned, in creation order, with
/// their friend type parsed.
///
/// Expected: Ok with two friendships
#[tokio::test]
async fn returns_owned_friendships_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let me = factory::create_user(db).await?;
    let bot = factory::create_user(db).await?;
    let pal = factory::create_user(db).await?;

    factory::friendship::FriendshipFactory::new(db, me.id, bot.id)
        .friend_type("aibot")
        .build()
        .await?;
    factory::create_friendship(db, me.id, pal.id).await?;
    factory::create_friendship(db, pal.id, me.id).await?;

    let repo = FriendshipRepository::new(db);
    let friendships = repo.get_by_user_id(me.id).await?;

    assert_eq!(friendships.len(), 2);
    assert_eq!(friendships[0].friend_id, bot.id);
    assert_eq!(friendships[0].friend_type, FriendType::Aibot);
    assert_eq!(friendships[1].friend_id, pal.id);
    assert_eq!(friendships[1].friend_type, FriendType::Normal);

    Ok(())
}

/// Tests that a corrupt friend type surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_friend_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let me = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::friendship::FriendshipFactory::new(db, me.id, other.id)
        .friend_type("enemy")
        .build()
        .await?;

    let repo = FriendshipRepository::new(db);
    let result = repo.get_by_user_id(me.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
