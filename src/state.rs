//! State shared by the dispatcher, command handlers and gateway events.
//!
//! The state is built once during startup and cloned into every command
//! invocation. Every field is cheap to clone: the connection pool and the
//! reqwest client are reference counted internally, everything else sits
//! behind an `Arc`.

use std::{collections::HashSet, sync::Arc};

use sea_orm::DatabaseConnection;

use crate::{
    service::{footer_quote::FooterQuotes, patron::PatronRegistry},
    settings::SettingsCache,
};

#[derive(Clone)]
pub struct BotState {
    /// Connection pool for repositories that are not behind the settings cache.
    pub db: DatabaseConnection,

    /// Authoritative per-guild settings.
    pub settings: Arc<SettingsCache>,

    pub patrons: Arc<PatronRegistry>,

    pub quotes: Arc<FooterQuotes>,

    /// Client for third-party content APIs.
    pub http_client: reqwest::Client,

    /// Users allowed to run owner-only commands.
    pub owner_ids: Arc<HashSet<u64>>,
}

impl BotState {
    pub fn new(
        db: DatabaseConnection,
        settings: Arc<SettingsCache>,
        patrons: Arc<PatronRegistry>,
        quotes: Arc<FooterQuotes>,
        http_client: reqwest::Client,
        owner_ids: HashSet<u64>,
    ) -> Self {
        Self {
            db,
            settings,
            patrons,
            quotes,
            http_client,
            owner_ids: Arc::new(owner_ids),
        }
    }

    pub fn is_owner(&self, user_id: u64) -> bool {
        self.owner_ids.contains(&user_id)
    }
}
