use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::FriendDto;

/// Request body for sending a message.
///
/// Every field is optional at the wire level so that missing values surface as
/// validation errors with a descriptive message rather than a generic parse failure.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageDto {
    pub sender_id: Option<i32>,
    pub receiver_id: Option<i32>,
    pub is_self: Option<bool>,
    /// One of `text`, `voice` or `image`
    #[serde(rename = "type")]
    pub message_type: Option<String>,
    pub content: Option<String>,
    /// Client send time in milliseconds since the Unix epoch
    pub timestamp: Option<i64>,
    pub duration: Option<String>,
    pub caption: Option<String>,
}

/// A message as seen by one participant of the conversation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: i32,
    pub sender_id: i32,
    pub receiver_id: i32,
    pub is_self: bool,
    #[serde(rename = "type")]
    pub message_type: String,
    pub content: String,
    pub timestamp: i64,
    pub status: String,
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// One conversation in the message list, represented by its most recent message.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageListItemDto {
    pub id: i32,
    /// The other participant of the conversation.
    pub sender: FriendDto,
    pub text: String,
    pub time: String,
    pub unread: i32,
}
