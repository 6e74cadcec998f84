//! Item sources: where the CLI gets the items it hands to the core.

mod json;
mod seed;

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::NaiveDate;
use cloudhub_core::listing::Item;

use crate::{Config, Result};

pub use json::JsonFileSource;
pub use seed::SeedSource;

/// Supplies already-deserialized items to the listing and calendar core.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetches every item this source knows about.
    async fn fetch_items(&self) -> Result<Vec<Item>>;

    /// Short human-readable description, used in logs.
    fn describe(&self) -> String;
}

/// Picks the JSON file source when a path is configured, seed data otherwise.
pub fn select_source(
    data_path: Option<PathBuf>,
    config: &Config,
    today: NaiveDate,
) -> Box<dyn ItemSource> {
    match data_path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SeedSource::new(today, config.seed_count)),
    }
}
