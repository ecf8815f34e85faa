use sea_orm::DatabaseConnection;

use crate::server::{
    data::{friendship::FriendshipRepository, user::UserRepository},
    error::AppError,
    model::friend::Friend,
};

pub struct FriendService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the friend list of a user in the order the friendships were created.
    ///
    /// Friendships pointing at users that no longer exist are skipped.
    pub async fn get_friends(&self, user_id: i32) -> Result<Vec<Friend>, AppError> {
        let friendships = FriendshipRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        let friend_ids: Vec<i32> = friendships.iter().map(|f| f.friend_id).collect();
        let users: std::collections::HashMap<i32, _> = UserRepository::new(self.db)
            .get_by_ids(&friend_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let friends = friendships
            .into_iter()
            .filter_map(|f| match users.get(&f.friend_id).cloned() {
                Some(user) => Some(user.into_friend(f.friend_type)),
                None => {
                    tracing::warn!(
                        "Skipping friendship {} of user {}: user {} not found",
                        f.id,
                        user_id,
                        f.friend_id
                    );
                    None
                }
            })
            .collect();

        Ok(friends)
    }
}
