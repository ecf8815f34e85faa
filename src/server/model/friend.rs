//! Friendship domain models.

use std::fmt;

use crate::{
    model::user::FriendDto,
    server::error::{internal::InternalError, AppError},
};

/// Kind of account on the other side of a friendship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FriendType {
    #[default]
    Normal,
    /// Automated assistant account.
    Aibot,
    /// Platform notification account.
    System,
}

impl FriendType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Aibot => "aibot",
            Self::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(Self::Normal),
            "aibot" => Some(Self::Aibot),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// Official accounts are operated by the platform rather than a person.
    pub fn is_official(&self) -> bool {
        matches!(self, Self::Aibot | Self::System)
    }
}

impl fmt::Display for FriendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directed friendship edge from `user_id` to `friend_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Friendship {
    pub id: i32,
    pub user_id: i32,
    pub friend_id: i32,
    pub friend_type: FriendType,
}

impl Friendship {
    /// Converts an entity model to a friendship domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Friendship)` - The converted domain model
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - Stored friend type is unknown
    pub fn from_entity(entity: entity::friendship::Model) -> Result<Self, AppError> {
        let friend_type = FriendType::parse(&entity.friend_type).ok_or(
            InternalError::UnknownStoredValue {
                column: "friendships.friend_type",
                value: entity.friend_type.clone(),
            },
        )?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            friend_id: entity.friend_id,
            friend_type,
        })
    }
}

/// Contact profile shown in friend and conversation lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    pub id: i32,
    pub name: String,
    pub avatar: String,
    pub online: bool,
    pub is_official: bool,
    pub last_active: String,
    pub friend_type: FriendType,
}

impl Friend {
    pub fn into_dto(self) -> FriendDto {
        FriendDto {
            id: self.id,
            name: self.name,
            avatar: self.avatar,
            online: self.online,
            is_official: self.is_official,
            last_active: self.last_active,
            friend_type: self.friend_type.to_string(),
        }
    }
}
