//! Messaging service.
//!
//! Orchestrates the message store, the user directory and the friendship repository to
//! build the conversation list, viewer-relative chat history, and send/read operations.

use chrono::{DateTime, Local, TimeZone};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{
        friendship::FriendshipRepository, message::MessageRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        friend::FriendType,
        message::{ChatMessage, MessageListEntry, SendMessageParam},
    },
    util::time::format_message_time,
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the conversation list of a user, newest conversation first.
    ///
    /// Display times are rendered relative to the server's local time.
    pub async fn get_message_list(&self, user_id: i32) -> Result<Vec<MessageListEntry>, AppError> {
        self.get_message_list_at(user_id, &Local::now()).await
    }

    /// Gets the conversation list of a user with display times relative to `now`.
    ///
    /// Each entry holds the last message of one conversation, the profile of the other
    /// participant and the number of unread messages from them. Conversations whose
    /// other participant no longer exists in the directory are skipped.
    ///
    /// # Returns
    /// - `Ok(Vec<MessageListEntry>)` - Conversations ordered by last message timestamp descending
    /// - `Err(AppError::DbErr)` - Database error during any lookup
    /// - `Err(AppError::InternalErr)` - A stored value could not be interpreted
    pub async fn get_message_list_at<Tz>(
        &self,
        user_id: i32,
        now: &DateTime<Tz>,
    ) -> Result<Vec<MessageListEntry>, AppError>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let message_repo = MessageRepository::new(self.db);

        let last_messages = message_repo.get_last_messages(user_id).await?;
        if last_messages.is_empty() {
            return Ok(Vec::new());
        }

        let unread_counts = message_repo.get_unread_counts(user_id).await?;

        let friend_types: HashMap<i32, FriendType> = FriendshipRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?
            .into_iter()
            .map(|f| (f.friend_id, f.friend_type))
            .collect();

        let contact_ids: Vec<i32> = last_messages
            .iter()
            .map(|m| m.counterpart(user_id))
            .collect();
        let contacts: HashMap<i32, _> = UserRepository::new(self.db)
            .get_by_ids(&contact_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let mut entries = Vec::with_capacity(last_messages.len());
        for message in last_messages {
            let contact_id = message.counterpart(user_id);

            let Some(contact) = contacts.get(&contact_id).cloned() else {
                tracing::warn!(
                    "Skipping conversation {} of user {}: user {} not found",
                    message.session_id,
                    user_id,
                    contact_id
                );
                continue;
            };

            let friend_type = friend_types.get(&contact_id).copied().unwrap_or_default();

            entries.push(MessageListEntry {
                message_id: message.id,
                contact: contact.into_friend(friend_type),
                time: format_message_time(message.timestamp, now)?,
                text: message.content,
                unread: unread_counts.get(&contact_id).copied().unwrap_or(0),
            });
        }

        Ok(entries)
    }

    /// Gets the conversation between `current_user_id` and `other_user_id` in
    /// chronological order, each message flagged with whether the current user sent it.
    pub async fn get_chat_history(
        &self,
        current_user_id: i32,
        other_user_id: i32,
    ) -> Result<Vec<ChatMessage>, AppError> {
        let messages = MessageRepository::new(self.db)
            .get_chat_history(current_user_id, other_user_id)
            .await?;

        Ok(messages
            .into_iter()
            .map(|m| ChatMessage::for_viewer(m, current_user_id))
            .collect())
    }

    /// Validates and stores a new message.
    ///
    /// Validation happens before any database access. The returned message carries the
    /// `isSelf` value supplied by the caller, which is not checked against the sender.
    ///
    /// # Returns
    /// - `Ok(ChatMessage)` - The stored message with the caller's `isSelf`
    /// - `Err(AppError::BadRequest)` - Request failed validation
    /// - `Err(AppError::DbErr)` - Database error; nothing was stored
    pub async fn send_message(&self, param: SendMessageParam) -> Result<ChatMessage, AppError> {
        let (create_param, is_self) = param.into_create_param()?;

        let message = MessageRepository::new(self.db).create(create_param).await?;

        if !is_self {
            tracing::debug!(
                "Message {} from {} stored with caller-supplied isSelf=false",
                message.id,
                message.sender_id
            );
        }

        Ok(ChatMessage { message, is_self })
    }

    /// Marks every message `friend_id` sent to `user_id` as read and clears the unread
    /// counter.
    pub async fn mark_as_read(&self, user_id: i32, friend_id: i32) -> Result<bool, AppError> {
        let updated = MessageRepository::new(self.db)
            .mark_as_read(user_id, friend_id)
            .await?;

        tracing::debug!(
            "User {} read {} messages from {}",
            user_id,
            updated,
            friend_id
        );

        Ok(true)
    }
}
