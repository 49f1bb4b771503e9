use crate::{
    data::{guild_settings::GuildSettingsRepository, store::SettingsStore},
    error::store::StoreError,
    model::guild_settings::GuildSettings,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use std::time::Duration;
use test_utils::{builder::TestBuilder, factory::guild_settings::GuildSettingsFactory};

mod bounded;
mod find;
mod load_all;
mod update;
mod upsert_default;

const TIMEOUT: Duration = Duration::from_secs(5);
