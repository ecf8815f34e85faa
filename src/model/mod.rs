//! Data transfer objects exchanged with API clients.
//!
//! These types define the JSON wire shapes of the REST API. Field names are serialized in
//! camelCase to match the mobile and web clients.

pub mod api;
pub mod message;
pub mod user;
