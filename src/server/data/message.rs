//! Message store.
//!
//! The `MessageRepository` is the only writer of the `messages`, `sessions` and
//! `unread_messages` tables. Creating a message and marking messages read each touch
//! several tables and run inside a single transaction so no partial state is ever
//! visible to other requests.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::{HashMap, HashSet};

use crate::server::{
    error::AppError,
    model::message::{CreateMessageParam, Message, MessageStatus},
    util::session_key::{canonical_session_key, session_key_candidates},
};

/// Repository owning persistence of messages, sessions and unread counters.
pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    /// Creates a new MessageRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a message and updates its session and the receiver's unread counter.
    ///
    /// Within one transaction this:
    /// 1. inserts the message row, deriving the canonical session key when none is given
    /// 2. creates the session row for the key, or moves its last-message reference to
    ///    this message (participants are never rewritten)
    /// 3. creates the `(receiver, sender)` unread counter with a count of 1, or
    ///    increments it
    ///
    /// Steps 2 and 3 are single `INSERT .. ON CONFLICT DO UPDATE` statements, so two
    /// concurrent first messages of a pair can not both create a row.
    ///
    /// # Arguments
    /// - `param` - Message fields, status and optional preset session key
    ///
    /// # Returns
    /// - `Ok(Message)` - The stored message with its generated id
    /// - `Err(AppError::DbErr)` - Database error; nothing was persisted
    pub async fn create(&self, param: CreateMessageParam) -> Result<Message, AppError> {
        let session_id = param
            .session_id
            .unwrap_or_else(|| canonical_session_key(param.sender_id, param.receiver_id));
        let now = Utc::now();

        // Dropping `txn` without commit rolls every step back
        let txn = self.db.begin().await?;

        let message = entity::message::ActiveModel {
            session_id: ActiveValue::Set(session_id),
            sender_id: ActiveValue::Set(param.sender_id),
            receiver_id: ActiveValue::Set(param.receiver_id),
            message_type: ActiveValue::Set(param.message_type.as_str().to_string()),
            content: ActiveValue::Set(param.content),
            duration: ActiveValue::Set(param.duration),
            caption: ActiveValue::Set(param.caption),
            timestamp: ActiveValue::Set(param.timestamp),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        upsert_session(&txn, &message, now).await?;
        increment_unread(&txn, message.receiver_id, message.sender_id, now).await?;

        txn.commit().await?;

        tracing::debug!(
            "Stored message {} from {} to {} in {}",
            message.id,
            message.sender_id,
            message.receiver_id,
            message.session_id
        );

        Message::from_entity(message)
    }

    /// Gets every message exchanged between `user_a` and `user_b`.
    ///
    /// Matches both orderings of the session key. Messages are ordered by the
    /// client-supplied timestamp ascending, ties broken by id.
    ///
    /// # Returns
    /// - `Ok(Vec<Message>)` - Messages of the conversation (empty if none)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_chat_history(&self, user_a: i32, user_b: i32) -> Result<Vec<Message>, AppError> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::SessionId.is_in(session_key_candidates(user_a, user_b)))
            .order_by_asc(entity::message::Column::Timestamp)
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Message::from_entity)
            .collect()
    }

    /// Marks every message `sender_id` sent to `reader_id` as read and clears the
    /// `(reader_id, sender_id)` unread counter.
    ///
    /// Both steps run in one transaction. Messages already marked read are left
    /// untouched and a missing counter is not an error, so repeated calls are no-ops.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of messages whose status changed
    /// - `Err(AppError::DbErr)` - Database error; neither step was persisted
    pub async fn mark_as_read(&self, reader_id: i32, sender_id: i32) -> Result<u64, AppError> {
        let read = MessageStatus::Read.as_str();

        let txn = self.db.begin().await?;

        let updated = entity::prelude::Message::update_many()
            .col_expr(entity::message::Column::Status, Expr::value(read))
            .filter(
                entity::message::Column::SessionId
                    .is_in(session_key_candidates(reader_id, sender_id)),
            )
            .filter(entity::message::Column::SenderId.eq(sender_id))
            .filter(entity::message::Column::ReceiverId.eq(reader_id))
            .filter(entity::message::Column::Status.ne(read))
            .exec(&txn)
            .await?;

        entity::prelude::UnreadMessage::delete_many()
            .filter(entity::unread_message::Column::UserId.eq(reader_id))
            .filter(entity::unread_message::Column::SenderId.eq(sender_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(updated.rows_affected)
    }

    /// Gets the number of unread messages `sender_id` has sent to `user_id`.
    ///
    /// # Returns
    /// - `Ok(i32)` - Unread count, `0` when no counter exists
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_unread_count(&self, user_id: i32, sender_id: i32) -> Result<i32, AppError> {
        let counter = entity::prelude::UnreadMessage::find_by_id((user_id, sender_id))
            .one(self.db)
            .await?;

        Ok(counter.map(|c| c.count).unwrap_or(0))
    }

    /// Gets all unread counters of `user_id`, keyed by sender id.
    pub async fn get_unread_counts(&self, user_id: i32) -> Result<HashMap<i32, i32>, AppError> {
        let counters = entity::prelude::UnreadMessage::find()
            .filter(entity::unread_message::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(counters.into_iter().map(|c| (c.sender_id, c.count)).collect())
    }

    /// Gets the most recent message of every conversation `user_id` participates in.
    ///
    /// Sessions are found through their participant columns and resolved to the message
    /// they reference. A pair with rows under both key orderings yields only its newest
    /// message. Results are ordered by client timestamp descending, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Message>)` - One message per contact (empty if the user has none)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_last_messages(&self, user_id: i32) -> Result<Vec<Message>, AppError> {
        let sessions = entity::prelude::Session::find()
            .filter(
                Condition::any()
                    .add(entity::session::Column::User1Id.eq(user_id))
                    .add(entity::session::Column::User2Id.eq(user_id)),
            )
            .all(self.db)
            .await?;

        if sessions.is_empty() {
            return Ok(Vec::new());
        }

        let last_message_ids: Vec<i32> = sessions.iter().map(|s| s.last_message_id).collect();

        let messages = entity::prelude::Message::find()
            .filter(entity::message::Column::Id.is_in(last_message_ids))
            .order_by_desc(entity::message::Column::Timestamp)
            .order_by_desc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        // Newest first, so the first message seen for a contact is the one to keep
        let mut seen = HashSet::new();
        messages
            .into_iter()
            .map(Message::from_entity)
            .filter(|m| match m {
                Ok(message) => seen.insert(message.counterpart(user_id)),
                Err(_) => true,
            })
            .collect()
    }
}

/// Creates the session row for the message's key or points it at the message.
async fn upsert_session(
    txn: &DatabaseTransaction,
    message: &entity::message::Model,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    entity::prelude::Session::insert(entity::session::ActiveModel {
        id: ActiveValue::Set(message.session_id.clone()),
        user1_id: ActiveValue::Set(message.sender_id),
        user2_id: ActiveValue::Set(message.receiver_id),
        last_message_id: ActiveValue::Set(message.id),
        updated_at: ActiveValue::Set(now),
    })
    .on_conflict(
        OnConflict::column(entity::session::Column::Id)
            .update_columns([
                entity::session::Column::LastMessageId,
                entity::session::Column::UpdatedAt,
            ])
            .to_owned(),
    )
    .exec_without_returning(txn)
    .await?;

    Ok(())
}

/// Creates the `(user_id, sender_id)` unread counter at 1 or increments it.
async fn increment_unread(
    txn: &DatabaseTransaction,
    user_id: i32,
    sender_id: i32,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    entity::prelude::UnreadMessage::insert(entity::unread_message::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        sender_id: ActiveValue::Set(sender_id),
        count: ActiveValue::Set(1),
        updated_at: ActiveValue::Set(now),
    })
    .on_conflict(
        OnConflict::columns([
            entity::unread_message::Column::UserId,
            entity::unread_message::Column::SenderId,
        ])
        .value(
            entity::unread_message::Column::Count,
            Expr::col((
                entity::prelude::UnreadMessage,
                entity::unread_message::Column::Count,
            ))
            .add(1),
        )
        .update_column(entity::unread_message::Column::UpdatedAt)
        .to_owned(),
    )
    .exec_without_returning(txn)
    .await?;

    Ok(())
}
