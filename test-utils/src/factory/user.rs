//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .nickname("Alice")
///     .status("online")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    uid: i32,
    nickname: String,
    avatar: String,
    status: String,
    last_seen: Option<String>,
    signature: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - uid: auto-incremented counter value
    /// - nickname: `"User {n}"`
    /// - avatar: `"/avatars/{n}.png"`
    /// - status: `"offline"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            uid: n as i32,
            nickname: format!("User {}", n),
            avatar: format!("/avatars/{}.png", n),
            status: "offline".to_string(),
            last_seen: None,
            signature: None,
        }
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    /// Sets the presence status (`online`, `offline` or `away`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn last_seen(mut self, last_seen: impl Into<String>) -> Self {
        self.last_seen = Some(last_seen.into());
        self
    }

    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity with generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            uid: ActiveValue::Set(self.uid),
            nickname: ActiveValue::Set(self.nickname),
            avatar: ActiveValue::Set(self.avatar),
            status: ActiveValue::Set(self.status),
            last_seen: ActiveValue::Set(self.last_seen),
            signature: ActiveValue::Set(self.signature),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
