//! Client error types.

use std::path::PathBuf;

use cloudhub_core::calendar::CalendarError;
use cloudhub_core::listing::QueryError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while loading items or answering a command.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid item data: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
