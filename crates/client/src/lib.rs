//! cloudhub_client - CLI shell around `cloudhub_core`.
//!
//! Owns everything with side effects: reading item data, configuration,
//! logging and terminal output.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod source;

pub use config::Config;
pub use error::{ClientError, Result};
pub use source::ItemSource;
