use std::sync::Arc;

use serenity::async_trait;

use crate::{
    command::registry::CommandRegistry,
    error::command::CommandError,
    model::{guild_settings::GuildSettings, message::InboundMessage},
    state::BotState,
};

/// Contract every command implements.
///
/// Expected outcomes such as bad input are answered through the context and
/// return `Ok(())`. An `Err` is treated as a failure of the command itself:
/// it is logged and the user gets a generic notice.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError>;
}

/// Outbound chat operations.
///
/// Calls return immediately; delivery happens in the background and failures
/// are only logged.
pub trait MessageSink: Send + Sync {
    fn send_text(&self, channel_id: u64, content: String);

    fn send_embed(&self, channel_id: u64, embed: Embed);

    fn send_file(&self, channel_id: u64, file: OutboundFile, content: Option<String>);

    fn delete_message(&self, channel_id: u64, message_id: u64);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Transport-independent embed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
}

impl Embed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Everything a handler gets for one invocation.
pub struct CommandContext {
    /// Name or alias the user typed, lowercase.
    pub invoke: String,
    /// Whitespace separated arguments after the name.
    pub args: Vec<String>,
    /// Argument text after the name with its original spacing.
    pub raw_args: String,
    /// Prefix that matched this message.
    pub prefix: String,
    pub message: InboundMessage,
    /// Settings snapshot taken when the message was dispatched.
    pub settings: Arc<GuildSettings>,
    pub state: BotState,
    pub registry: Arc<CommandRegistry>,
    pub sink: Arc<dyn MessageSink>,
}

impl CommandContext {
    pub fn guild_id(&self) -> u64 {
        self.message.guild_id
    }

    pub fn reply(&self, content: impl Into<String>) {
        self.sink.send_text(self.message.channel_id, content.into());
    }

    /// Sends an embed, adding a random footer quote unless one is set.
    pub fn reply_embed(&self, mut embed: Embed) {
        if embed.footer.is_none() {
            embed.footer = Some(self.state.quotes.random().to_string());
        }
        self.sink.send_embed(self.message.channel_id, embed);
    }

    pub fn reply_file(&self, file: OutboundFile, content: Option<String>) {
        self.sink.send_file(self.message.channel_id, file, content);
    }
}
