use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Session::Table)
                    .if_not_exists()
                    .col(string_len(Session::Id, 50).primary_key())
                    .col(integer(Session::User1Id))
                    .col(integer(Session::User2Id))
                    .col(integer(Session::LastMessageId))
                    .col(timestamp(Session::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Session::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Session {
    #[sea_orm(iden = "sessions")]
    Table,
    Id,
    User1Id,
    User2Id,
    LastMessageId,
    UpdatedAt,
}
