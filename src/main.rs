mod bot;
mod command;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod settings;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{
    command::Dispatcher, config::Config, data::guild_settings::GuildSettingsRepository,
    error::AppError, scheduler::patron_reload, settings::SettingsCache, state::BotState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client();

    let store = Arc::new(GuildSettingsRepository::new(
        db.clone(),
        config.store_timeout,
    ));
    let settings = Arc::new(SettingsCache::new(store, config.default_prefix.clone()));
    startup::load_guild_settings(&settings).await;

    let quotes = startup::load_footer_quotes(&db).await;
    let patrons = startup::load_patrons(&db).await;

    patron_reload::start_scheduler(db.clone(), patrons.clone(), &config.patron_reload_cron)
        .await?;

    let registry = Arc::new(command::builtin_registry()?);
    tracing::info!("Registered {} commands", registry.len());

    let state = BotState::new(
        db,
        settings,
        patrons,
        quotes,
        http_client,
        config.owner_ids.clone(),
    );
    let dispatcher = Arc::new(Dispatcher::new(registry, state));

    let client = bot::start::init_bot(&config, dispatcher).await?;
    bot::start::start_bot(client).await?;

    Ok(())
}
