//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so
//! the rest of the bot never sees stored string IDs. The settings repository is
//! additionally exposed through the `SettingsStore` trait, which is the only
//! seam the settings cache talks to.

pub mod footer_quote;
pub mod guild_settings;
pub mod patron;
pub mod store;

pub use footer_quote::FooterQuoteRepository;
pub use guild_settings::GuildSettingsRepository;
pub use patron::PatronRepository;
pub use store::SettingsStore;
