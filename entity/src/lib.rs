//! SeaORM entity models for the bot's persistent storage.

pub mod prelude;

pub mod footer_quote;
pub mod guild_settings;
pub mod patron;
