//! HTTP request handlers.
//!
//! Controllers extract path, query and body inputs, convert DTOs into domain parameters,
//! call the service layer, and wrap results in the `{code, msg, data}` envelope.

pub mod friend;
pub mod message;
pub mod user;
