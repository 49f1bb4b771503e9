//! Domain models shared by the dispatcher, the settings cache and the data layer.
//!
//! Models are converted from entity models at the repository boundary so the
//! rest of the bot works with typed IDs instead of stored strings.

pub mod guild_settings;
pub mod message;
pub mod patron;
