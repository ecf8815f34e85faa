//! Messaging domain models and parameters.
//!
//! Provides the stored message model, the viewer-relative message shape returned by
//! chat endpoints, conversation list entries, and the send request with its validation.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::{
    model::message::{MessageDto, MessageListItemDto, SendMessageDto},
    server::{
        error::{internal::InternalError, AppError},
        model::friend::Friend,
        util::session_key::canonical_session_key,
    },
};

/// Kind of content carried by a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Text,
    /// Audio clip; `duration` holds its length.
    Voice,
    /// Picture; `content` holds its URL and `caption` optional text.
    Image,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Voice => "voice",
            Self::Image => "image",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(Self::Text),
            "voice" => Some(Self::Voice),
            "image" => Some(Self::Image),
            _ => None,
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery state of a message. The only field of a message that changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    Sending,
    Sent,
    Read,
    Failed,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sending => "sending",
            Self::Sent => "sent",
            Self::Read => "read",
            Self::Failed => "failed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sending" => Some(Self::Sending),
            "sent" => Some(Self::Sent),
            "read" => Some(Self::Read),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted message.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    /// Session key of the conversation this message belongs to.
    pub session_id: String,
    pub sender_id: i32,
    pub receiver_id: i32,
    pub message_type: MessageType,
    pub content: String,
    pub duration: Option<String>,
    pub caption: Option<String>,
    /// Client-supplied send time in milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub status: MessageStatus,
    /// Server time at which the message was stored.
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Converts an entity model to a message domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Message)` - The converted domain model
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - Stored type or status is unknown
    pub fn from_entity(entity: entity::message::Model) -> Result<Self, AppError> {
        let message_type =
            MessageType::parse(&entity.message_type).ok_or(InternalError::UnknownStoredValue {
                column: "messages.type",
                value: entity.message_type.clone(),
            })?;
        let status = MessageStatus::parse(&entity.status).ok_or(InternalError::UnknownStoredValue {
            column: "messages.status",
            value: entity.status.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            session_id: entity.session_id,
            sender_id: entity.sender_id,
            receiver_id: entity.receiver_id,
            message_type,
            content: entity.content,
            duration: entity.duration,
            caption: entity.caption,
            timestamp: entity.timestamp,
            status,
            created_at: entity.created_at,
        })
    }

    /// Returns the participant of this message that is not `viewer_id`.
    pub fn counterpart(&self, viewer_id: i32) -> i32 {
        if self.sender_id == viewer_id {
            self.receiver_id
        } else {
            self.sender_id
        }
    }
}

/// Parameters for persisting a new message.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMessageParam {
    /// Session key to store the message under; derived from the participants when `None`.
    pub session_id: Option<String>,
    pub sender_id: i32,
    pub receiver_id: i32,
    pub message_type: MessageType,
    pub content: String,
    pub duration: Option<String>,
    pub caption: Option<String>,
    pub timestamp: i64,
    pub status: MessageStatus,
}

/// A message annotated with whether the viewer sent it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub message: Message,
    pub is_self: bool,
}

impl ChatMessage {
    /// Annotates `message` from the point of view of `viewer_id`.
    pub fn for_viewer(message: Message, viewer_id: i32) -> Self {
        let is_self = message.sender_id == viewer_id;
        Self { message, is_self }
    }

    pub fn into_dto(self) -> MessageDto {
        let message = self.message;
        MessageDto {
            id: message.id,
            sender_id: message.sender_id,
            receiver_id: message.receiver_id,
            is_self: self.is_self,
            message_type: message.message_type.to_string(),
            content: message.content,
            timestamp: message.timestamp,
            status: message.status.to_string(),
            session_id: message.session_id,
            duration: message.duration,
            caption: message.caption,
        }
    }
}

/// One conversation in a user's message list.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageListEntry {
    /// Id of the most recent message of the conversation.
    pub message_id: i32,
    /// Profile of the other participant.
    pub contact: Friend,
    pub text: String,
    /// Relative display time of the most recent message.
    pub time: String,
    /// Messages from `contact` the user has not read yet.
    pub unread: i32,
}

impl MessageListEntry {
    pub fn into_dto(self) -> MessageListItemDto {
        MessageListItemDto {
            id: self.message_id,
            sender: self.contact.into_dto(),
            text: self.text,
            time: self.time,
            unread: self.unread,
        }
    }
}

/// Unvalidated send request as received from a client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SendMessageParam {
    pub sender_id: Option<i32>,
    pub receiver_id: Option<i32>,
    /// Caller's claim about message ownership, echoed back unverified.
    pub is_self: Option<bool>,
    pub message_type: Option<String>,
    pub content: Option<String>,
    pub timestamp: Option<i64>,
    pub duration: Option<String>,
    pub caption: Option<String>,
}

impl SendMessageParam {
    pub fn from_dto(dto: SendMessageDto) -> Self {
        Self {
            sender_id: dto.sender_id,
            receiver_id: dto.receiver_id,
            is_self: dto.is_self,
            message_type: dto.message_type,
            content: dto.content,
            timestamp: dto.timestamp,
            duration: dto.duration,
            caption: dto.caption,
        }
    }

    /// Validates the request and converts it into create parameters.
    ///
    /// The session key is derived canonically from the two participants and the status
    /// is set to `sent`. Empty optional strings are treated as absent.
    ///
    /// # Returns
    /// - `Ok((CreateMessageParam, bool))` - Create parameters and the caller-asserted `is_self`
    /// - `Err(AppError::BadRequest)` - A required field is missing or malformed
    pub fn into_create_param(self) -> Result<(CreateMessageParam, bool), AppError> {
        let sender_id = require_id(self.sender_id, "senderId")?;
        let receiver_id = require_id(self.receiver_id, "receiverId")?;
        let is_self = self
            .is_self
            .ok_or_else(|| AppError::BadRequest("isSelf is required".to_string()))?;

        let message_type = self
            .message_type
            .ok_or_else(|| AppError::BadRequest("type is required".to_string()))?;
        let message_type = MessageType::parse(&message_type).ok_or_else(|| {
            AppError::BadRequest(format!(
                "type must be one of text, voice or image, got '{}'",
                message_type
            ))
        })?;

        let content = self
            .content
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::BadRequest("content is required".to_string()))?;

        let timestamp = self
            .timestamp
            .filter(|t| *t > 0)
            .ok_or_else(|| AppError::BadRequest("timestamp is required".to_string()))?;
        if DateTime::<Utc>::from_timestamp_millis(timestamp).is_none() {
            return Err(AppError::BadRequest(format!(
                "timestamp {} is out of range",
                timestamp
            )));
        }

        Ok((
            CreateMessageParam {
                session_id: Some(canonical_session_key(sender_id, receiver_id)),
                sender_id,
                receiver_id,
                message_type,
                content,
                duration: self.duration.filter(|d| !d.is_empty()),
                caption: self.caption.filter(|c| !c.is_empty()),
                timestamp,
                status: MessageStatus::Sent,
            },
            is_self,
        ))
    }
}

fn require_id(value: Option<i32>, field: &str) -> Result<i32, AppError> {
    value
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::BadRequest(format!("{} is required", field)))
}
