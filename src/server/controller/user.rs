use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::{BatchUsersDto, UserDto},
    },
    server::{
        error::AppError, model::user::GetUsersParam, service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user directory endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get a user profile.
///
/// # Returns
/// - `200 OK` - The user profile
/// - `400 Bad Request` - Malformed user id
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/user/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User profile", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid user id", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = user_id?;

    let user = UserService::new(&state.db)
        .get_user(user_id)
        .await
        .map_err(|e| e.context("Failed to load user"))?;

    Ok((StatusCode::OK, Json(ApiResponse::success(user.into_dto()))))
}

/// Get several user profiles at once.
///
/// Ids without a matching user are left out of the result.
///
/// # Returns
/// - `200 OK` - Profiles of the existing users
/// - `400 Bad Request` - Malformed request body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users/batch",
    tag = USER_TAG,
    request_body = BatchUsersDto,
    responses(
        (status = 200, description = "User profiles", body = ApiResponse<Vec<UserDto>>),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchUsersDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let users = UserService::new(&state.db)
        .get_users(GetUsersParam {
            user_ids: payload.user_ids,
        })
        .await
        .map_err(|e| e.context("Failed to load users"))?;

    let dtos: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::success(dtos))))
}
