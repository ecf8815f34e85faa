use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UnreadMessage::Table)
                    .if_not_exists()
                    .col(integer(UnreadMessage::UserId))
                    .col(integer(UnreadMessage::SenderId))
                    .col(integer(UnreadMessage::Count).default(0))
                    .col(timestamp(UnreadMessage::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(UnreadMessage::UserId)
                            .col(UnreadMessage::SenderId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UnreadMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UnreadMessage {
    #[sea_orm(iden = "unread_messages")]
    Table,
    UserId,
    SenderId,
    Count,
    UpdatedAt,
}
