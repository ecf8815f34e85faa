use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, CurrentUserQuery, ErrorDto},
        message::{MessageDto, MessageListItemDto, SendMessageDto},
    },
    server::{
        error::AppError, model::message::SendMessageParam, service::message::MessageService,
        state::AppState,
    },
};

/// Tag for grouping messaging endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

/// Get the conversation list of the current user.
///
/// Returns one entry per conversation holding the most recent message, the other
/// participant's profile and the number of messages from them the user has not read.
/// Entries are ordered newest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Query parameters identifying the current user
///
/// # Returns
/// - `200 OK` - Conversation list
/// - `400 Bad Request` - Missing or malformed `currentUserId`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    params(CurrentUserQuery),
    responses(
        (status = 200, description = "Conversation list", body = ApiResponse<Vec<MessageListItemDto>>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    query: Result<Query<CurrentUserQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let service = MessageService::new(&state.db);

    let entries = service
        .get_message_list(query.current_user_id)
        .await
        .map_err(|e| e.context("Failed to load message list"))?;

    let dtos: Vec<MessageListItemDto> = entries.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::success(dtos))))
}

/// Get the chat history between the current user and another user.
///
/// Messages are returned oldest first, each flagged with whether the current user
/// sent it.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - Id of the other participant
/// - `query` - Query parameters identifying the current user
///
/// # Returns
/// - `200 OK` - Messages of the conversation (empty if none)
/// - `400 Bad Request` - Malformed user id or `currentUserId`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/chat/{user_id}",
    tag = MESSAGE_TAG,
    params(
        ("user_id" = i32, Path, description = "Id of the other participant"),
        CurrentUserQuery
    ),
    responses(
        (status = 200, description = "Chat history", body = ApiResponse<Vec<MessageDto>>),
        (status = 400, description = "Invalid path or query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chat_history(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
    query: Result<Query<CurrentUserQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = user_id?;
    let Query(query) = query?;

    let service = MessageService::new(&state.db);

    let messages = service
        .get_chat_history(query.current_user_id, user_id)
        .await
        .map_err(|e| e.context("Failed to load chat history"))?;

    let dtos: Vec<MessageDto> = messages.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::success(dtos))))
}

/// Send a message.
///
/// Stores the message, attaches it to the conversation of the two participants and
/// increments the receiver's unread counter. The `isSelf` value of the request is
/// echoed back in the response.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Message to send
///
/// # Returns
/// - `200 OK` - The stored message
/// - `400 Bad Request` - Missing or invalid fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/chat/send",
    tag = MESSAGE_TAG,
    request_body = SendMessageDto,
    responses(
        (status = 200, description = "Message stored", body = ApiResponse<MessageDto>),
        (status = 400, description = "Invalid message", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<SendMessageDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = MessageService::new(&state.db);

    let message = service
        .send_message(SendMessageParam::from_dto(payload))
        .await
        .map_err(|e| e.context("Failed to send message"))?;

    Ok((StatusCode::OK, Json(ApiResponse::success(message.into_dto()))))
}

/// Mark every message from a user as read by the current user.
///
/// Clears the current user's unread counter for that sender. Calling it again is a
/// no-op.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - Id of the sender whose messages were read
/// - `query` - Query parameters identifying the current user
///
/// # Returns
/// - `200 OK` - `true`
/// - `400 Bad Request` - Malformed user id or `currentUserId`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/chat/read/{user_id}",
    tag = MESSAGE_TAG,
    params(
        ("user_id" = i32, Path, description = "Id of the sender whose messages were read"),
        CurrentUserQuery
    ),
    responses(
        (status = 200, description = "Messages marked as read", body = ApiResponse<bool>),
        (status = 400, description = "Invalid path or query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_as_read(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
    query: Result<Query<CurrentUserQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = user_id?;
    let Query(query) = query?;

    let service = MessageService::new(&state.db);

    let marked = service
        .mark_as_read(query.current_user_id, user_id)
        .await
        .map_err(|e| e.context("Failed to mark messages as read"))?;

    Ok((StatusCode::OK, Json(ApiResponse::success(marked))))
}
