use serenity::all::{Context, CreateMessage, Member};

use crate::state::BotState;

/// Handles the guild_member_addition event when a member joins a guild.
///
/// Sends the guild's join message to its system channel when enabled. Guilds
/// without a system channel get nothing.
pub async fn handle_guild_member_addition(state: &BotState, ctx: Context, new_member: Member) {
    if new_member.user.bot {
        return;
    }

    let guild_id = new_member.guild_id.get();

    let Some((guild_name, system_channel_id)) = new_member
        .guild_id
        .to_guild_cached(&ctx.cache)
        .map(|guild| (guild.name.clone(), guild.system_channel_id))
    else {
        tracing::warn!("Received member_add event for uncached guild {}", guild_id);
        return;
    };

    let settings = match state.settings.get(guild_id, &guild_name).await {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load settings for guild {}: {}", guild_id, e);
            return;
        }
    };

    if !settings.enable_join_message {
        return;
    }

    let Some(channel_id) = system_channel_id else {
        tracing::debug!("Guild {} has no system channel for join messages", guild_id);
        return;
    };

    let content = settings.render_join_message(
        new_member.user.id.get(),
        &new_member.user.name,
        &guild_name,
    );

    if let Err(e) = channel_id
        .send_message(&ctx.http, CreateMessage::new().content(content))
        .await
    {
        tracing::warn!("Failed to send join message in guild {}: {}", guild_id, e);
    }
}
