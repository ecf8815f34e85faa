//! OpenAPI document for the REST API.

use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::server::controller::{friend, message, user};

#[derive(OpenApi)]
#[openapi(
    info(title = "Ticktok messaging API"),
    paths(
        message::get_messages,
        message::get_chat_history,
        message::send_message,
        message::mark_as_read,
        user::get_user,
        user::get_users_batch,
        friend::get_friends,
    ),
    tags(
        (name = "message", description = "Conversations, chat history and read state"),
        (name = "user", description = "User directory"),
        (name = "friend", description = "Friend lists"),
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document as JSON.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
