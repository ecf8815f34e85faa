use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub uid: i32,
    pub nickname: String,
    pub avatar: String,
    pub status: String,
    pub last_seen: String,
    pub signature: String,
}

/// Profile of a contact as shown in friend and conversation lists.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendDto {
    pub id: i32,
    pub name: String,
    pub avatar: String,
    pub online: bool,
    pub is_official: bool,
    pub last_active: String,
    /// One of `normal`, `aibot` or `system`
    pub friend_type: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatchUsersDto {
    pub user_ids: Vec<i32>,
}
