use super::*;

/// Tests reading a conversation written in both directions.
///
/// Verifies that messages sent either way are returned in timestamp order regardless
/// of insertion order.
///
/// Expected: Ok with messages sorted by timestamp ascending
#[tokio::test]
async fn returns_messages_in_timestamp_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    repo.create(text_message(1, 2, "second", 2_000)).await?;
    repo.create(text_message(2, 1, "first", 1_000)).await?;
    repo.create(text_message(1, 2, "third", 3_000)).await?;

    let history = repo.get_chat_history(2, 1).await?;
    let contents: Vec<_> = history.iter().map(|m| m.content.as_str()).collect();

    assert_eq!(contents, vec!["first", "second", "third"]);

    Ok(())
}

/// Tests that equal timestamps fall back to insertion order.
///
/// Expected: Ok with messages ordered by id when timestamps tie
#[tokio::test]
async fn breaks_timestamp_ties_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    let a = repo.create(text_message(1, 2, "a", 5_000)).await?;
    let b = repo.create(text_message(2, 1, "b", 5_000)).await?;

    let history = repo.get_chat_history(1, 2).await?;
    let ids: Vec<_> = history.iter().map(|m| m.id).collect();

    assert_eq!(ids, vec![a.id, b.id]);

    Ok(())
}

/// Tests that rows stored under the non-canonical key are still returned.
///
/// Verifies that a message seeded under `chat_2_1` is merged with messages stored
/// under `chat_1_2` into one history.
///
/// Expected: Ok with both messages
#[tokio::test]
async fn includes_messages_under_either_key_ordering() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::message::MessageFactory::new(db, 2, 1)
        .content("legacy")
        .timestamp(1_000)
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    repo.create(text_message(1, 2, "current", 2_000)).await?;

    let history = repo.get_chat_history(1, 2).await?;
    let contents: Vec<_> = history.iter().map(|m| m.content.as_str()).collect();

    assert_eq!(contents, vec!["legacy", "current"]);

    Ok(())
}

/// Tests that other conversations are not included.
///
/// Expected: Ok with only messages between the requested pair
#[tokio::test]
async fn excludes_other_conversations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    repo.create(text_message(1, 2, "mine", 1_000)).await?;
    repo.create(text_message(1, 3, "other", 1_000)).await?;
    repo.create(text_message(12, 1, "similar key", 1_000)).await?;

    let history = repo.get_chat_history(1, 2).await?;

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].content, "mine");

    Ok(())
}

/// Tests reading a conversation with no messages.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unknown_pair() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    let history = repo.get_chat_history(7, 8).await?;

    assert!(history.is_empty());

    Ok(())
}
