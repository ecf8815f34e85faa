pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_friendship_table;
mod m20250302_000003_create_message_table;
mod m20250302_000004_create_session_table;
mod m20250302_000005_create_unread_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_friendship_table::Migration),
            Box::new(m20250302_000003_create_message_table::Migration),
            Box::new(m20250302_000004_create_session_table::Migration),
            Box::new(m20250302_000005_create_unread_message_table::Migration),
        ]
    }
}
