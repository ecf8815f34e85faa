//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let alice = factory::create_user(&db).await?;
//! let bob = factory::user::UserFactory::new(&db)
//!     .nickname("Bob")
//!     .status("online")
//!     .build()
//!     .await?;
//! factory::create_friendship(&db, alice.id, bob.id).await?;
//! ```
//!
//! Message rows inserted through `message::MessageFactory` bypass the message store,
//! so no session or unread counter is touched. Use it to seed history directly.

pub mod friendship;
pub mod helpers;
pub mod message;
pub mod user;

pub use friendship::create_friendship;
pub use message::create_message;
pub use user::create_user;
