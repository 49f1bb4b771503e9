use std::sync::Arc;

use serenity::all::{Context, Message, Permissions};

use crate::{
    bot::sink::DiscordSink,
    command::{DispatchOutcome, Dispatcher},
    model::message::InboundMessage,
};

/// Handles message creation in a channel.
///
/// Only guild messages are dispatched; direct messages are ignored.
pub async fn handle_message(dispatcher: &Dispatcher, ctx: Context, message: Message) {
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let guild_name = guild_id.name(&ctx.cache).unwrap_or_default();
    let author_permissions = message
        .author_permissions(&ctx.cache)
        .unwrap_or_else(Permissions::empty);

    let inbound = InboundMessage {
        guild_id: guild_id.get(),
        guild_name,
        channel_id: message.channel_id.get(),
        message_id: message.id.get(),
        author_id: message.author.id.get(),
        author_name: message.author.name.clone(),
        author_is_bot: message.author.bot,
        author_permissions,
        content: message.content,
    };

    let sink = Arc::new(DiscordSink::new(ctx.http.clone()));

    match dispatcher.dispatch(inbound, sink).await {
        DispatchOutcome::Ignored => {}
        outcome => tracing::trace!("Dispatched message {}: {:?}", message.id, outcome),
    }
}
