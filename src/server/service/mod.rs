//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Rejecting malformed requests before any storage access
//! - **Orchestration**: Combining messages, sessions, unread counters and user profiles
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod friend;
pub mod message;
pub mod user;

#[cfg(test)]
mod test;
