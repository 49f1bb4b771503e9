//! Discord gateway integration.
//!
//! Translates serenity events into calls on the dispatcher and the settings
//! cache, and turns outbound chat operations back into Discord API calls.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild create events to register guilds
//! - `GUILD_MESSAGES` - Receive messages to dispatch commands
//! - `MESSAGE_CONTENT` - Read message text (privileged intent)
//! - `GUILD_MEMBERS` - Receive member joins for the join message (privileged intent)
//!
//! Both privileged intents must be enabled in the Discord Developer Portal for
//! the bot application.

pub mod handler;
pub mod sink;
pub mod start;
