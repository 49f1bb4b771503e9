pub use super::footer_quote::Entity as FooterQuote;
pub use super::guild_settings::Entity as GuildSettings;
pub use super::patron::Entity as Patron;
