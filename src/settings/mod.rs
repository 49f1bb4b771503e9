//! In-memory guild settings with write-through persistence.

pub mod cache;

pub use cache::SettingsCache;

#[cfg(test)]
mod test;
