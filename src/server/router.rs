use axum::{
    routing::{get, post, put},
    Router,
};

use crate::server::{
    controller::{
        friend::get_friends,
        message::{get_chat_history, get_messages, mark_as_read, send_message},
        user::{get_user, get_users_batch},
    },
    docs::openapi_json,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/messages", get(get_messages))
        .route("/api/chat/send", post(send_message))
        .route("/api/chat/read/{user_id}", put(mark_as_read))
        .route("/api/chat/{user_id}", get(get_chat_history))
        .route("/api/user/{user_id}", get(get_user))
        .route("/api/users/batch", post(get_users_batch))
        .route("/api/friends", get(get_friends))
        .route("/api/openapi.json", get(openapi_json))
}
