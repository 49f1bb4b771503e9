use thiserror::Error;

use crate::error::{settings::SettingsError, store::StoreError};

/// Unexpected failures raised by a command handler.
///
/// Expected outcomes such as missing permissions are not errors; handlers reply
/// to the user themselves and return `Ok(())`.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Settings could not be persisted; the user is told their change was not saved.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
