use async_trait::async_trait;
use chrono::NaiveDate;
use cloudhub_core::listing::{generate_seed_items, Item};

use super::ItemSource;
use crate::Result;

/// Generated demo items centered on a date.
#[derive(Debug, Clone, Copy)]
pub struct SeedSource {
    center: NaiveDate,
    count: u32,
}

impl SeedSource {
    pub fn new(center: NaiveDate, count: u32) -> Self {
        Self { center, count }
    }
}

#[async_trait]
impl ItemSource for SeedSource {
    async fn fetch_items(&self) -> Result<Vec<Item>> {
        Ok(generate_seed_items(self.center, self.count))
    }

    fn describe(&self) -> String {
        format!("seed data ({} items around {})", self.count, self.center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_source_yields_requested_count() {
        let center = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let items = SeedSource::new(center, 10).fetch_items().await.unwrap();
        assert_eq!(items.len(), 10);
    }
}
