use crate::server::{data::user::UserRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod get_by_id;
mod get_by_ids;
