use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildSettings::Id))
                    .col(string_uniq(GuildSettings::GuildId))
                    .col(string(GuildSettings::Name))
                    .col(string(GuildSettings::Prefix))
                    .col(boolean(GuildSettings::EnableSwearFilter).default(false))
                    .col(boolean(GuildSettings::EnableSpamFilter).default(false))
                    .col(big_integer_null(GuildSettings::MuteRoleId))
                    .col(boolean(GuildSettings::FilterInvites).default(false))
                    .col(boolean(GuildSettings::EnableJoinMessage).default(false))
                    .col(text(GuildSettings::CustomJoinMessage))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum GuildSettings {
    Table,
    Id,
    GuildId,
    Name,
    Prefix,
    EnableSwearFilter,
    EnableSpamFilter,
    MuteRoleId,
    FilterInvites,
    EnableJoinMessage,
    CustomJoinMessage,
}
