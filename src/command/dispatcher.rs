use std::sync::Arc;

use crate::{
    command::{
        context::{CommandContext, MessageSink},
        filter::{self, FilterKind},
        policy::{self, Cooldowns, Rejection},
        registry::CommandRegistry,
    },
    error::command::CommandError,
    model::{guild_settings::GuildSettings, message::InboundMessage},
    state::BotState,
};

const FAILURE_NOTICE: &str =
    "Something went wrong while running this command. The problem has been logged.";
const PERSISTENCE_NOTICE: &str =
    "Your change could not be saved, please try again later. Nothing was changed.";

/// How a single inbound message was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Not a command, or a command nobody registered.
    Ignored,
    /// Deleted by a message filter.
    Filtered(FilterKind),
    /// A policy check failed and the user was told why.
    Rejected(Rejection),
    Completed { command: String },
    /// The handler returned an error or panicked.
    Failed { command: String },
}

/// A message split into command name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Lowercase command name or alias.
    pub name: String,
    pub args: Vec<String>,
    /// Text after the name, trimmed, with inner spacing kept.
    pub raw_args: String,
}

/// Splits `content` into an invocation when it starts with `prefix`.
///
/// The name has to follow the prefix directly: with prefix `!`, `! help` is
/// not an invocation.
pub fn parse_invocation(content: &str, prefix: &str) -> Option<Invocation> {
    if prefix.is_empty() {
        return None;
    }

    let rest = content.strip_prefix(prefix)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        return None;
    }

    let (name, raw_args) = match rest.split_once(char::is_whitespace) {
        Some((name, raw_args)) => (name, raw_args.trim()),
        None => (rest, ""),
    };

    Some(Invocation {
        name: name.to_lowercase(),
        args: raw_args.split_whitespace().map(String::from).collect(),
        raw_args: raw_args.to_string(),
    })
}

/// Routes inbound messages to command handlers.
///
/// One `dispatch` call handles one message from start to end. Calls for
/// different messages run concurrently and share nothing but the registry,
/// the state and the cooldown table.
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
    state: BotState,
    cooldowns: Cooldowns,
}

impl Dispatcher {
    pub fn new(registry: Arc<CommandRegistry>, state: BotState) -> Self {
        Self {
            registry,
            state,
            cooldowns: Cooldowns::new(),
        }
    }

    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    pub fn state(&self) -> &BotState {
        &self.state
    }

    pub async fn dispatch(
        &self,
        message: InboundMessage,
        sink: Arc<dyn MessageSink>,
    ) -> DispatchOutcome {
        if message.author_is_bot {
            return DispatchOutcome::Ignored;
        }

        let settings = self.settings_for(&message).await;

        if let Some(kind) = filter::check(&settings, &message) {
            tracing::debug!(
                "Filtered message {} in guild {} ({:?})",
                message.message_id,
                message.guild_id,
                kind
            );
            sink.delete_message(message.channel_id, message.message_id);
            sink.send_text(message.channel_id, kind.warning(message.author_id));
            return DispatchOutcome::Filtered(kind);
        }

        let prefix = settings
            .effective_prefix(self.state.settings.default_prefix())
            .to_string();

        let Some(invocation) = parse_invocation(&message.content, &prefix) else {
            return DispatchOutcome::Ignored;
        };

        let Some(descriptor) = self.registry.resolve(&invocation.name).cloned() else {
            tracing::debug!("Ignoring unknown command '{}'", invocation.name);
            return DispatchOutcome::Ignored;
        };

        if let Err(rejection) = policy::check(
            &descriptor,
            invocation.args.len(),
            &prefix,
            &message,
            &self.state,
            &self.cooldowns,
        ) {
            tracing::debug!(
                "Rejected '{}' from user {}: {:?}",
                descriptor.name(),
                message.author_id,
                rejection
            );
            sink.send_text(message.channel_id, rejection.message());
            return DispatchOutcome::Rejected(rejection);
        }

        let command = descriptor.name().to_string();
        let channel_id = message.channel_id;
        let guild_id = message.guild_id;

        let ctx = CommandContext {
            invoke: invocation.name,
            args: invocation.args,
            raw_args: invocation.raw_args,
            prefix,
            message,
            settings,
            state: self.state.clone(),
            registry: self.registry.clone(),
            sink: sink.clone(),
        };

        // Running the handler on its own task turns a panic into a JoinError.
        let handler = descriptor.handler();
        let result = tokio::spawn(async move { handler.run(&ctx).await }).await;

        match result {
            Ok(Ok(())) => {
                tracing::debug!("Command '{}' completed in guild {}", command, guild_id);
                DispatchOutcome::Completed { command }
            }
            Ok(Err(CommandError::Settings(e))) => {
                tracing::error!("Command '{}' could not save settings: {}", command, e);
                sink.send_text(channel_id, PERSISTENCE_NOTICE.to_string());
                DispatchOutcome::Failed { command }
            }
            Ok(Err(e)) => {
                tracing::error!("Command '{}' failed in guild {}: {}", command, guild_id, e);
                sink.send_text(channel_id, FAILURE_NOTICE.to_string());
                DispatchOutcome::Failed { command }
            }
            Err(e) => {
                tracing::error!("Command '{}' panicked in guild {}: {}", command, guild_id, e);
                sink.send_text(channel_id, FAILURE_NOTICE.to_string());
                DispatchOutcome::Failed { command }
            }
        }
    }

    /// Settings for the message's guild, registering the guild if needed.
    ///
    /// A store failure never fails the message; the guild is treated as
    /// default-configured until registration succeeds.
    async fn settings_for(&self, message: &InboundMessage) -> Arc<GuildSettings> {
        let cache = &self.state.settings;

        match cache.get(message.guild_id, &message.guild_name).await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    "Using default settings for guild {}: {}",
                    message.guild_id,
                    e
                );
                Arc::new(GuildSettings::new_default(
                    message.guild_id,
                    &message.guild_name,
                    cache.default_prefix(),
                ))
            }
        }
    }
}
