use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, CurrentUserQuery, ErrorDto},
        user::FriendDto,
    },
    server::{error::AppError, service::friend::FriendService, state::AppState},
};

/// Tag for grouping friend endpoints in OpenAPI documentation
pub static FRIEND_TAG: &str = "friend";

/// Get the friend list of the current user.
///
/// # Returns
/// - `200 OK` - Friend profiles in the order the friendships were made
/// - `400 Bad Request` - Missing or malformed `currentUserId`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/friends",
    tag = FRIEND_TAG,
    params(CurrentUserQuery),
    responses(
        (status = 200, description = "Friend list", body = ApiResponse<Vec<FriendDto>>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_friends(
    State(state): State<AppState>,
    query: Result<Query<CurrentUserQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let friends = FriendService::new(&state.db)
        .get_friends(query.current_user_id)
        .await
        .map_err(|e| e.context("Failed to load friends"))?;

    let dtos: Vec<FriendDto> = friends.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::success(dtos))))
}
