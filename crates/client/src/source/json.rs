use std::path::PathBuf;

use async_trait::async_trait;
use cloudhub_core::listing::Item;

use super::ItemSource;
use crate::{ClientError, Result};

/// Reads a JSON array of items from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ItemSource for JsonFileSource {
    async fn fetch_items(&self) -> Result<Vec<Item>> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ClientError::Read {
                path: self.path.clone(),
                source,
            })?;
        let items: Vec<Item> = serde_json::from_str(&contents)?;

        tracing::debug!(
            path = %self.path.display(),
            bytes = contents.len(),
            count = items.len(),
            "Parsed item file"
        );

        Ok(items)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
