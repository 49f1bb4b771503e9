use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    error::AppError,
    service::{
        footer_quote::FooterQuotes,
        patron::{PatronRegistry, PatronService},
    },
    settings::SettingsCache,
};

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Connects to the Sqlite database and runs pending migrations.
///
/// Connection checkout is bounded by the configured store timeout so a
/// stalled database surfaces as an error instead of a hung event.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false)
        .connect_timeout(config.store_timeout)
        .acquire_timeout(config.store_timeout);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the client used for third-party content APIs.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(concat!("skybot/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Bulk loads guild settings into the cache.
///
/// A failed load is logged and the bot starts with an empty cache; guilds are
/// then registered or adopted lazily on first contact.
pub async fn load_guild_settings(settings: &SettingsCache) {
    match settings.load_all().await {
        Ok(count) => tracing::info!("Loaded settings for {} guilds", count),
        Err(e) => tracing::error!(
            "Failed to load guild settings, starting with an empty cache: {}",
            e
        ),
    }
}

pub async fn load_footer_quotes(db: &DatabaseConnection) -> Arc<FooterQuotes> {
    Arc::new(FooterQuotes::load(db).await)
}

/// Loads patrons into a new registry. A failed load leaves it empty until the
/// next scheduled reload.
pub async fn load_patrons(db: &DatabaseConnection) -> Arc<PatronRegistry> {
    let patrons = Arc::new(PatronRegistry::new());

    match PatronService::new(db, &patrons).reload().await {
        Ok(count) => tracing::info!("Loaded {} patrons", count),
        Err(e) => tracing::error!("Failed to load patrons: {}", e),
    }

    patrons
}
