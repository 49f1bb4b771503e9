use std::time::Duration;
use thiserror::Error;

/// Failures of the settings store adapter.
///
/// The adapter never retries; every variant is reported to the caller as soon
/// as it happens.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database rejected the query or could not be reached.
    #[error("Settings store unavailable: {0}")]
    Unavailable(#[from] sea_orm::DbErr),

    /// The operation did not finish within the configured bound.
    #[error("Settings store operation '{operation}' timed out after {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },

    /// A stored row could not be converted into its domain model.
    #[error("Stored row for '{key}' is invalid: {reason}")]
    Corrupt { key: String, reason: String },
}
