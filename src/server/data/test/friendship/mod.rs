use crate::server::{data::friendship::FriendshipRepository, error::AppError, model::friend::FriendType};
use test_utils::{builder::TestBuilder, factory};

mod get_by_user_id;
