//! Guild create handling.
//!
//! `guild_create` fires for every guild on startup, when the bot joins a new
//! guild and when a guild becomes available again after an outage. Each one
//! goes through the settings cache so unknown guilds get their default row.

use serenity::all::{Context, Guild};

use crate::state::BotState;

pub async fn handle_guild_create(
    state: &BotState,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    let guild_id = guild.id.get();

    tracing::debug!(
        "Guild create event: {} ({}) - new: {:?}",
        guild.name,
        guild_id,
        is_new
    );

    if let Err(e) = state.settings.get(guild_id, &guild.name).await {
        tracing::error!(
            "Failed to register settings for guild {} ({}): {}",
            guild.name,
            guild_id,
            e
        );
    }
}
