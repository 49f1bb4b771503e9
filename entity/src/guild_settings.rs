use sea_orm::entity::prelude::*;

/// One row per guild the bot has seen.
///
/// `guild_id` is the Discord snowflake stored as a string, unique across the table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    pub name: String,
    pub prefix: String,
    pub enable_swear_filter: bool,
    pub enable_spam_filter: bool,
    pub mute_role_id: Option<i64>,
    pub filter_invites: bool,
    pub enable_join_message: bool,
    #[sea_orm(column_type = "Text")]
    pub custom_join_message: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
