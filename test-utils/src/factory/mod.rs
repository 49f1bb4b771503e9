//! Factories for seeding test rows with sensible defaults.
//!
//! Each factory follows the same builder shape: `new(db)` fills in unique
//! defaults, setters override individual columns and `build()` inserts the row.

pub mod footer_quote;
pub mod guild_settings;
pub mod helpers;
pub mod patron;
