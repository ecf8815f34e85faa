//! Friendship factory for linking two test users.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a one-directional friendship row (`user_id` → `friend_id`).
pub struct FriendshipFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    friend_id: i32,
    friend_type: String,
}

impl<'a> FriendshipFactory<'a> {
    /// Creates a new FriendshipFactory with `friend_type` defaulting to `"normal"`.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, friend_id: i32) -> Self {
        Self {
            db,
            user_id,
            friend_id,
            friend_type: "normal".to_string(),
        }
    }

    /// Sets the friendship type (`normal`, `aibot` or `system`).
    pub fn friend_type(mut self, friend_type: impl Into<String>) -> Self {
        self.friend_type = friend_type.into();
        self
    }

    pub async fn build(self) -> Result<entity::friendship::Model, DbErr> {
        entity::friendship::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            friend_id: ActiveValue::Set(self.friend_id),
            friend_type: ActiveValue::Set(self.friend_type),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `normal` friendship from `user_id` to `friend_id`.
pub async fn create_friendship(
    db: &DatabaseConnection,
    user_id: i32,
    friend_id: i32,
) -> Result<entity::friendship::Model, DbErr> {
    FriendshipFactory::new(db, user_id, friend_id).build().await
}
