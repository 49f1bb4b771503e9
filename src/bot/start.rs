use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, command::Dispatcher, config::Config, error::AppError};

/// Builds the Discord client with the command dispatcher attached.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `dispatcher` - Dispatcher every guild message is routed through
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(config: &Config, dispatcher: Arc<Dispatcher>) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(dispatcher))
        .await?;

    Ok(client)
}

/// Connects to the gateway and runs until the client shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
