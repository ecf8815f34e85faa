use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{GetUsersParam, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user profile by id
    ///
    /// # Returns
    /// - `Ok(User)` - The user profile
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Gets the profiles of every existing user in `param.user_ids`
    pub async fn get_users(&self, param: GetUsersParam) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db).get_by_ids(&param.user_ids).await
    }
}
