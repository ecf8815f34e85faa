use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Response envelope wrapping every API result.
///
/// `code` is `0` on success. On failure it carries the HTTP status of the response and
/// `msg` holds a human-readable description; `data` is omitted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "success".to_string(),
            data: Some(data),
        }
    }

    pub fn failure(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

/// Identifies the user on whose behalf a request is made.
#[derive(Deserialize, Clone, Debug, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CurrentUserQuery {
    pub current_user_id: i32,
}

/// Envelope returned for failed requests.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ErrorDto {
    /// HTTP status code of the response
    pub code: i32,
    pub msg: String,
}
