use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub session_id: String,
    pub sender_id: i32,
    pub receiver_id: i32,
    /// One of `text`, `voice` or `image`
    #[sea_orm(column_name = "type")]
    pub message_type: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub duration: Option<String>,
    pub caption: Option<String>,
    /// Client-supplied send time in milliseconds since the Unix epoch
    pub timestamp: i64,
    /// One of `sending`, `sent`, `read` or `failed`
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
