//! User directory repository.
//!
//! Read-only access to the `users` table. User lifecycle is owned by another service.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{error::AppError, model::user::User};

/// Repository providing read access to user profiles.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds every user whose id is in `ids`, ordered by id.
    ///
    /// Ids without a matching user are skipped. An empty slice returns an empty vector
    /// without querying the database.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Users found (possibly fewer than requested)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }
}
