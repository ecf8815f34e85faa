//! User domain models.
//!
//! Users are owned by an external directory; this service only reads them to resolve
//! profiles for conversations and friend lists.

use crate::{
    model::user::UserDto,
    server::model::friend::{Friend, FriendType},
};

/// Presence status value marking a user as online.
const STATUS_ONLINE: &str = "online";

/// User profile as stored in the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Public account number shown on the profile page.
    pub uid: i32,
    pub nickname: String,
    pub avatar: String,
    /// Presence status, one of `online`, `offline` or `away`.
    pub status: String,
    /// Human-readable last activity description, e.g. "5 minutes ago".
    pub last_seen: Option<String>,
    pub signature: Option<String>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            uid: entity.uid,
            nickname: entity.nickname,
            avatar: entity.avatar,
            status: entity.status,
            last_seen: entity.last_seen,
            signature: entity.signature,
        }
    }

    pub fn is_online(&self) -> bool {
        self.status == STATUS_ONLINE
    }

    /// Builds the contact profile of this user for a friendship of the given type.
    pub fn into_friend(self, friend_type: FriendType) -> Friend {
        Friend {
            id: self.id,
            online: self.is_online(),
            name: self.nickname,
            avatar: self.avatar,
            is_official: friend_type.is_official(),
            last_active: self.last_seen.unwrap_or_default(),
            friend_type,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            uid: self.uid,
            nickname: self.nickname,
            avatar: self.avatar,
            status: self.status,
            last_seen: self.last_seen.unwrap_or_default(),
            signature: self.signature.unwrap_or_default(),
        }
    }
}

/// Parameters for looking up several users at once.
#[derive(Debug, Clone)]
pub struct GetUsersParam {
    pub user_ids: Vec<i32>,
}
