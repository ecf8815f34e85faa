pub use super::friendship::Entity as Friendship;
pub use super::message::Entity as Message;
pub use super::session::Entity as Session;
pub use super::unread_message::Entity as UnreadMessage;
pub use super::user::Entity as User;
