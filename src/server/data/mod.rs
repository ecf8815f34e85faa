//! Database repository layer.
//!
//! Repositories hold a reference to the database connection and perform all queries,
//! inserts, updates and deletes. They use SeaORM entity models internally and return
//! domain models from `server::model` so the service layer never sees entity types.

pub mod friendship;
pub mod message;
pub mod user;

#[cfg(test)]
mod test;
