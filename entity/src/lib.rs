//! SeaORM entity models for the ticktok database schema.

pub mod prelude;

pub mod friendship;
pub mod message;
pub mod session;
pub mod unread_message;
pub mod user;
