use super::*;

/// Tests listing the latest message of each conversation.
///
/// Verifies that one message per session is returned, the most recent one, ordered
/// newest first across conversations.
///
/// Expected: Ok with two messages, newest conversation first
#[tokio::test]
async fn returns_latest_message_per_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    repo.create(text_message(2, 1, "old from 2", 1_000)).await?;
    repo.create(text_message(1, 2, "latest with 2", 4_000)).await?;
    repo.create(text_message(3, 1, "latest with 3", 3_000)).await?;
    repo.create(text_message(4, 5, "unrelated", 5_000)).await?;

    let last = repo.get_last_messages(1).await?;
    let contents: Vec<_> = last.iter().map(|m| m.content.as_str()).collect();

    assert_eq!(contents, vec!["latest with 2", "latest with 3"]);

    Ok(())
}

/// Tests listing conversations for a user who has none.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_sessions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    repo.create(text_message(4, 5, "unrelated", 5_000)).await?;

    assert!(repo.get_last_messages(1).await?.is_empty());

    Ok(())
}

/// Tests a pair with session rows under both key orderings.
///
/// Verifies that a conversation stored under `chat_2_1` and continued under the
/// canonical `chat_1_2` is listed once, represented by its newest message.
///
/// Expected: Ok with one message per contact
#[tokio::test]
async fn merges_sessions_of_the_same_pair() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    repo.create(CreateMessageParam {
        session_id: Some("chat_2_1".to_string()),
        ..text_message(2, 1, "legacy", 1_000)
    })
    .await?;
    repo.create(text_message(1, 2, "current", 2_000)).await?;
    repo.create(text_message(3, 1, "other", 500)).await?;

    assert_eq!(count_sessions(db).await?, 3);

    let last = repo.get_last_messages(1).await?;
    let contents: Vec<_> = last.iter().map(|m| m.content.as_str()).collect();

    assert_eq!(contents, vec!["current", "other"]);

    Ok(())
}

/// Tests that the newer row wins when it lives under the non-canonical key.
///
/// Expected: Ok with the legacy-keyed message as the only entry
#[tokio::test]
async fn keeps_newest_message_across_key_orderings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    repo.create(text_message(1, 2, "canonical", 1_000)).await?;
    repo.create(CreateMessageParam {
        session_id: Some("chat_2_1".to_string()),
        ..text_message(2, 1, "legacy", 3_000)
    })
    .await?;

    let last = repo.get_last_messages(2).await?;

    assert_eq!(last.len(), 1);
    assert_eq!(last[0].content, "legacy");

    Ok(())
}
