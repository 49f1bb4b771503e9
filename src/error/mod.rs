//! Error types for every layer of the bot.
//!
//! `AppError` is the top-level error used by startup code. The layered errors
//! below it are kept separate so the dispatcher can tell user-visible
//! persistence failures apart from unexpected handler failures.

pub mod command;
pub mod config;
pub mod registry;
pub mod settings;
pub mod store;

use thiserror::Error;

use crate::error::{config::ConfigError, registry::RegistryError};

/// Top-level application error type.
///
/// Aggregates the errors that can abort startup. Nothing in the dispatch path
/// returns `AppError`; per-event failures are logged and contained.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Built-in command table could not be assembled.
    #[error(transparent)]
    RegistryErr(#[from] RegistryError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
