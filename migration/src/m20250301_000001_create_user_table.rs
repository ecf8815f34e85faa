use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(integer(User::Uid))
                    .col(string_len(User::Nickname, 100))
                    .col(string_len(User::Avatar, 255))
                    .col(string_len(User::Status, 16).default("offline"))
                    .col(string_len_null(User::LastSeen, 100))
                    .col(string_len_null(User::Signature, 255))
                    .col(
                        timestamp(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Uid,
    Nickname,
    Avatar,
    Status,
    LastSeen,
    Signature,
    CreatedAt,
}
