use super::*;

/// Tests marking a sender's messages as read.
///
/// Verifies that every message from the sender to the reader moves to `read`, the
/// reader's own outgoing messages keep their status, and the unread counter is
/// cleared.
///
/// Expected: Ok with only incoming messages updated
#[tokio::test]
async fn marks_incoming_messages_and_clears_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    repo.create(text_message(2, 1, "one", 1_000)).await?;
    repo.create(text_message(2, 1, "two", 2_000)).await?;
    repo.create(text_message(1, 2, "reply", 3_000)).await?;

    let updated = repo.mark_as_read(1, 2).await?;

    assert_eq!(updated, 2);
    assert_eq!(repo.get_unread_count(1, 2).await?, 0);

    let history = repo.get_chat_history(1, 2).await?;
    for message in history {
        if message.sender_id == 2 {
            assert_eq!(message.status, MessageStatus::Read);
        } else {
            assert_eq!(message.status, MessageStatus::Sent);
        }
    }

    // The other side's counter is independent
    assert_eq!(repo.get_unread_count(2, 1).await?, 1);

    Ok(())
}

/// Tests that marking as read twice changes nothing the second time.
///
/// Expected: Ok with 0 rows updated on the second call
#[tokio::test]
async fn is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    repo.create(text_message(2, 1, "one", 1_000)).await?;

    assert_eq!(repo.mark_as_read(1, 2).await?, 1);
    assert_eq!(repo.mark_as_read(1, 2).await?, 0);
    assert_eq!(repo.get_unread_count(1, 2).await?, 0);

    Ok(())
}

/// Tests marking as read when nothing was ever sent.
///
/// Expected: Ok with 0 rows updated
#[tokio::test]
async fn succeeds_without_messages_or_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);

    assert_eq!(repo.mark_as_read(1, 2).await?, 0);

    Ok(())
}

/// Tests that rows stored under the non-canonical key are marked read too.
///
/// Expected: Ok with the legacy row updated
#[tokio::test]
async fn marks_messages_under_either_key_ordering() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let legacy = factory::message::MessageFactory::new(db, 2, 1)
        .session_id("chat_2_1")
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    let updated = repo.mark_as_read(1, 2).await?;

    assert_eq!(updated, 1);
    let stored = entity::prelude::Message::find_by_id(legacy.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "read");

    Ok(())
}

/// Tests that a new message after reading starts the counter again.
///
/// Expected: Ok with count 1 after the read and a new message
#[tokio::test]
async fn counter_restarts_after_read() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    repo.create(text_message(2, 1, "one", 1_000)).await?;
    repo.create(text_message(2, 1, "two", 2_000)).await?;
    repo.mark_as_read(1, 2).await?;
    repo.create(text_message(2, 1, "three", 3_000)).await?;

    assert_eq!(repo.get_unread_count(1, 2).await?, 1);

    Ok(())
}
