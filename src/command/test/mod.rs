use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
    time::Duration,
};

use sea_orm::{DatabaseConnection, DbErr};
use serenity::{all::Permissions, async_trait};
use test_utils::builder::TestBuilder;

use crate::{
    command::{
        builtin_registry,
        context::{CommandContext, CommandHandler, Embed, MessageSink, OutboundFile},
        descriptor::{CommandCategory, CommandDescriptor, PermissionLevel},
        dispatcher::{DispatchOutcome, Dispatcher},
        filter::FilterKind,
        policy::Rejection,
        registry::CommandRegistry,
    },
    data::{guild_settings::GuildSettingsRepository, store::SettingsStore},
    error::{command::CommandError, settings::SettingsError, store::StoreError},
    model::{guild_settings::GuildSettings, message::InboundMessage, patron::PatronParam},
    service::{footer_quote::FooterQuotes, patron::PatronRegistry},
    settings::SettingsCache,
    state::BotState,
};


const GUILD_ID: u64 = 1000;
const CHANNEL_ID: u64 = 2000;
const MEMBER_ID: u64 = 3000;
const OWNER_ID: u64 = 4000;
const TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Sent {
    Text {
        channel_id: u64,
        content: String,
    },
    Embed {
        channel_id: u64,
        embed: Embed,
    },
    File {
        channel_id: u64,
        file: OutboundFile,
        content: Option<String>,
    },
    Delete {
        channel_id: u64,
        message_id: u64,
    },
}

/// Sink that records every outbound operation in order.
#[derive(Default)]
struct RecordingSink {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingSink {
    fn record(&self, sent: Sent) {
        self.sent.lock().unwrap().push(sent);
    }

    fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { content, .. } => Some(content),
                _ => None,
            })
            .collect()
    }

    fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

impl MessageSink for RecordingSink {
    fn send_text(&self, channel_id: u64, content: String) {
        self.record(Sent::Text {
            channel_id,
            content,
        });
    }

    fn send_embed(&self, channel_id: u64, embed: Embed) {
        self.record(Sent::Embed { channel_id, embed });
    }

    fn send_file(&self, channel_id: u64, file: OutboundFile, content: Option<String>) {
        self.record(Sent::File {
            channel_id,
            file,
            content,
        });
    }

    fn delete_message(&self, channel_id: u64, message_id: u64) {
        self.record(Sent::Delete {
            channel_id,
            message_id,
        });
    }
}

/// Store that is never reachable.
struct DownStore;

#[async_trait]
impl SettingsStore for DownStore {
    async fn load_all(&self) -> Result<Vec<GuildSettings>, StoreError> {
        Err(down())
    }

    async fn find(&self, _guild_id: u64) -> Result<Option<GuildSettings>, StoreError> {
        Err(down())
    }

    async fn upsert_default(&self, _defaults: &GuildSettings) -> Result<bool, StoreError> {
        Err(down())
    }

    async fn update(&self, _settings: &GuildSettings) -> Result<u64, StoreError> {
        Err(down())
    }
}

fn down() -> StoreError {
    StoreError::Unavailable(DbErr::Custom("connection refused".to_string()))
}

/// Dispatcher wired to an in-memory database and a recording sink.
struct Harness {
    db: DatabaseConnection,
    dispatcher: Dispatcher,
    sink: Arc<RecordingSink>,
}

impl Harness {
    async fn new() -> Self {
        Self::with_registry(builtin_registry().unwrap()).await
    }

    async fn with_registry(registry: CommandRegistry) -> Self {
        let db = TestBuilder::new()
            .with_bot_tables()
            .build()
            .await
            .unwrap()
            .db
            .unwrap();
        let store = Arc::new(GuildSettingsRepository::new(db.clone(), TIMEOUT));

        Self::with_store(db, store, registry)
    }

    fn with_store(
        db: DatabaseConnection,
        store: Arc<dyn SettingsStore>,
        registry: CommandRegistry,
    ) -> Self {
        let state = BotState::new(
            db.clone(),
            Arc::new(SettingsCache::new(store, "db!")),
            Arc::new(PatronRegistry::new()),
            Arc::new(FooterQuotes::new(Vec::new())),
            reqwest::Client::new(),
            HashSet::from([OWNER_ID]),
        );

        Self {
            db,
            dispatcher: Dispatcher::new(Arc::new(registry), state),
            sink: Arc::new(RecordingSink::default()),
        }
    }

    async fn send(&self, message: InboundMessage) -> DispatchOutcome {
        self.dispatcher.dispatch(message, self.sink.clone()).await
    }

    fn cached(&self) -> Option<Arc<GuildSettings>> {
        self.dispatcher.state().settings.cached(GUILD_ID)
    }

    async fn stored(&self) -> Option<GuildSettings> {
        GuildSettingsRepository::new(self.db.clone(), TIMEOUT)
            .find(GUILD_ID)
            .await
            .unwrap()
    }

    /// Registers the guild and replaces its settings.
    async fn configure(&self, change: impl FnOnce(GuildSettings) -> GuildSettings) {
        let settings = &self.dispatcher.state().settings;
        let current = settings.get(GUILD_ID, "Guild").await.unwrap();
        settings.set(change((*current).clone())).await.unwrap();
    }
}

fn message(author_id: u64, permissions: Permissions, content: &str) -> InboundMessage {
    InboundMessage {
        guild_id: GUILD_ID,
        guild_name: "Guild".to_string(),
        channel_id: CHANNEL_ID,
        message_id: 1,
        author_id,
        author_name: "user".to_string(),
        author_is_bot: false,
        author_permissions: permissions,
        content: content.to_string(),
    }
}

/// Message from a member without any moderation permission.
fn member(content: &str) -> InboundMessage {
    message(MEMBER_ID, Permissions::SEND_MESSAGES, content)
}

/// Message from a member with Manage Server.
fn admin(content: &str) -> InboundMessage {
    message(
        MEMBER_ID,
        Permissions::SEND_MESSAGES | Permissions::MANAGE_GUILD,
        content,
    )
}

fn completed(command: &str) -> DispatchOutcome {
    DispatchOutcome::Completed {
        command: command.to_string(),
    }
}
