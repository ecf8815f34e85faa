use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Message::Table)
                    .if_not_exists()
                    .col(pk_auto(Message::Id))
                    .col(string_len(Message::SessionId, 50))
                    .col(integer(Message::SenderId))
                    .col(integer(Message::ReceiverId))
                    .col(string_len(Message::Type, 16))
                    .col(text(Message::Content))
                    .col(string_len_null(Message::Duration, 10))
                    .col(string_len_null(Message::Caption, 255))
                    .col(big_integer(Message::Timestamp))
                    .col(string_len(Message::Status, 16).default("sending"))
                    .col(
                        timestamp(Message::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_message_session_id_timestamp")
                    .table(Message::Table)
                    .col(Message::SessionId)
                    .col(Message::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Message::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Message {
    #[sea_orm(iden = "messages")]
    Table,
    Id,
    SessionId,
    SenderId,
    ReceiverId,
    Type,
    Content,
    Duration,
    Caption,
    Timestamp,
    Status,
    CreatedAt,
}
