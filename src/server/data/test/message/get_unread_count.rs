use super::*;

/// Tests reading a counter that was never created.
///
/// Expected: Ok with 0
#[tokio::test]
async fn returns_zero_without_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);

    assert_eq!(repo.get_unread_count(1, 2).await?, 0);

    Ok(())
}

/// Tests reading all counters of a user keyed by sender.
///
/// Verifies that counters owned by other users are excluded.
///
/// Expected: Ok with one entry per sender
#[tokio::test]
async fn groups_counts_by_sender() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messaging_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    repo.create(text_message(2, 1, "a", 1_000)).await?;
    repo.create(text_message(2, 1, "b", 2_000)).await?;
    repo.create(text_message(3, 1, "c", 3_000)).await?;
    repo.create(text_message(1, 3, "d", 4_000)).await?;

    let counts = repo.get_unread_counts(1).await?;

    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get(&2), Some(&2));
    assert_eq!(counts.get(&3), Some(&1));

    Ok(())
}
