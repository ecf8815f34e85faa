use super::*;

/// Tests storing the first message between two users.
///
/// Verifies that the repository inserts the message under the canonical session key,
/// creates the session pointing at it, and starts the receiver's unread counter at 1.
///
/// Expected: Ok with message, session and counter created
#[tokio::test]
async fn creates_message_session_and_unread_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    let message = repo.create(text_message(2, 1, "hi", 1_000)).await?;

    assert!(message.id > 0);
    assert_eq!(message.session_id, "chat_1_2");
    assert_eq!(message.status, MessageStatus::Sent);
    assert_eq!(message.content, "hi");

    let session = entity::prelude::Session::find_by_id("chat_1_2".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(session.last_message_id, message.id);
    assert_eq!(session.user1_id, 2);
    assert_eq!(session.user2_id, 1);

    assert_eq!(repo.get_unread_count(1, 2).await?, 1);
    assert_eq!(repo.get_unread_count(2, 1).await?, 0);

    Ok(())
}

/// Tests that both directions of a conversation share one session.
///
/// Verifies that a reply from the other participant updates the existing session's
/// last message instead of creating a second session, and that the
/// participant columns are left as first written.
///
/// Expected: Ok with exactly one session referencing the reply
#[tokio::test]
async fn reply_reuses_existing_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    repo.create(text_message(1, 2, "ping", 1_000)).await?;
    let reply = repo.create(text_message(2, 1, "pong", 2_000)).await?;

    assert_eq!(count_sessions(db).await?, 1);

    let session = entity::prelude::Session::find_by_id("chat_1_2".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(session.last_message_id, reply.id);
    assert_eq!(session.user1_id, 1);
    assert_eq!(session.user2_id, 2);

    Ok(())
}

/// Tests that repeated messages increment the receiver's unread counter.
///
/// Verifies that three messages from the same sender leave a single counter row
/// with a count of 3, and that the sender's own counter is not touched.
///
/// Expected: Ok with count 3
#[tokio::test]
async fn increments_unread_counter_per_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    for i in 0..3 {
        repo.create(text_message(2, 1, "hi", 1_000 + i)).await?;
    }

    assert_eq!(repo.get_unread_count(1, 2).await?, 3);
    assert_eq!(repo.get_unread_count(2, 1).await?, 0);

    let rows = entity::prelude::UnreadMessage::find().count(db).await?;
    assert_eq!(rows, 1);

    Ok(())
}

/// Tests storing a message under an explicit session key.
///
/// Verifies that a preset session id is used as given rather than re-derived, which
/// lets existing conversations keep a non-canonical key.
///
/// Expected: Ok with message and session stored under the preset key
#[tokio::test]
async fn keeps_preset_session_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    let message = repo
        .create(CreateMessageParam {
            session_id: Some("chat_2_1".to_string()),
            ..text_message(2, 1, "legacy", 1_000)
        })
        .await?;

    assert_eq!(message.session_id, "chat_2_1");
    let session = entity::prelude::Session::find_by_id("chat_2_1".to_string())
        .one(db)
        .await?;
    assert!(session.is_some());

    Ok(())
}

/// Tests that a failing step rolls back the whole write.
///
/// Verifies that when the unread counter table is missing, the insert fails and
/// neither the message nor the session survives.
///
/// Expected: Err with no message or session persisted
#[tokio::test]
async fn rolls_back_when_a_step_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .with_table(entity::prelude::Session)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    let result = repo.create(text_message(2, 1, "lost", 1_000)).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(entity::prelude::Message::find().count(db).await?, 0);
    assert_eq!(count_sessions(db).await?, 0);

    Ok(())
}
