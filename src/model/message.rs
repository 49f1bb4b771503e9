use serenity::all::Permissions;

/// A guild chat message as seen by the dispatcher.
///
/// Built from the gateway event by the bot layer; handlers treat it as
/// read-only context.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub guild_id: u64,
    pub guild_name: String,
    pub channel_id: u64,
    pub message_id: u64,
    pub author_id: u64,
    pub author_name: String,
    pub author_is_bot: bool,
    /// Effective permissions of the author in the channel.
    pub author_permissions: Permissions,
    pub content: String,
}
