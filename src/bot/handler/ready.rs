use serenity::all::{ActivityData, Context, Ready};

use crate::state::BotState;

/// Handles the ready event when the bot connects to Discord.
///
/// Logs the connection and advertises the help command as the bot's activity.
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::playing(format!(
        "{}help",
        state.settings.default_prefix()
    ))));
}
