//! Friendship repository.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{error::AppError, model::friend::Friendship};

/// Repository providing read access to the `friendships` table.
pub struct FriendshipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendshipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all friendships where `user_id` is the owning side, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Friendship>)` - Friendships of the user (empty if none)
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - A stored friend type is unknown
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<Friendship>, AppError> {
        entity::prelude::Friendship::find()
            .filter(entity::friendship::Column::UserId.eq(user_id))
            .order_by_asc(entity::friendship::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Friendship::from_entity)
            .collect()
    }
}
