//! Message factory for seeding raw message rows.
//!
//! Rows are inserted directly into `messages`; sessions and unread counters are left
//! untouched. The session id defaults to `chat_{sender}_{receiver}` in the supplied
//! order, matching rows written before session keys were canonicalized.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    session_id: String,
    sender_id: i32,
    receiver_id: i32,
    message_type: String,
    content: String,
    timestamp: i64,
    status: String,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory for a text message from `sender_id` to `receiver_id`.
    ///
    /// Defaults:
    /// - session_id: `"chat_{sender_id}_{receiver_id}"`
    /// - message_type: `"text"`
    /// - content: `"hello"`
    /// - timestamp: current time in milliseconds
    /// - status: `"sent"`
    pub fn new(db: &'a DatabaseConnection, sender_id: i32, receiver_id: i32) -> Self {
        Self {
            db,
            session_id: format!("chat_{}_{}", sender_id, receiver_id),
            sender_id,
            receiver_id,
            message_type: "text".to_string(),
            content: "hello".to_string(),
            timestamp: Utc::now().timestamp_millis(),
            status: "sent".to_string(),
        }
    }

    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    pub fn message_type(mut self, message_type: impl Into<String>) -> Self {
        self.message_type = message_type.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            session_id: ActiveValue::Set(self.session_id),
            sender_id: ActiveValue::Set(self.sender_id),
            receiver_id: ActiveValue::Set(self.receiver_id),
            message_type: ActiveValue::Set(self.message_type),
            content: ActiveValue::Set(self.content),
            duration: ActiveValue::Set(None),
            caption: ActiveValue::Set(None),
            timestamp: ActiveValue::Set(self.timestamp),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a default text message row from `sender_id` to `receiver_id`.
pub async fn create_message(
    db: &DatabaseConnection,
    sender_id: i32,
    receiver_id: i32,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, sender_id, receiver_id).build().await
}
