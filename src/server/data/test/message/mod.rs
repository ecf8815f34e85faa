use crate::server::{
    data::message::MessageRepository,
    error::AppError,
    model::message::{CreateMessageParam, MessageStatus, MessageType},
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_chat_history;
mod get_last_messages;
mod get_unread_count;
mod mark_as_read;

/// Builds create parameters for a text message with a derived session key.
fn text_message(sender_id: i32, receiver_id: i32, content: &str, timestamp: i64) -> CreateMessageParam {
    CreateMessageParam {
        session_id: None,
        sender_id,
        receiver_id,
        message_type: MessageType::Text,
        content: content.to_string(),
        duration: None,
        caption: None,
        timestamp,
        status: MessageStatus::Sent,
    }
}

async fn count_sessions(db: &DatabaseConnection) -> Result<u64, AppError> {
    Ok(entity::prelude::Session::find().count(db).await?)
}
