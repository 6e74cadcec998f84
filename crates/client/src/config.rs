use std::{env, path::PathBuf};

use cloudhub_core::listing::{DEFAULT_PAGE_SIZE, MAX_SEED_ITEMS};

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file with items to browse. None means generated seed data.
    pub data_path: Option<PathBuf>,
    /// Page size when `--page-size` is not given (default: 12)
    pub page_size: usize,
    /// Page-size increment for each extra "load more" page (default: 12)
    pub load_more_step: usize,
    /// Number of seed items generated without a data file (default: 24,
    /// capped at `MAX_SEED_ITEMS`)
    pub seed_count: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLOUDHUB_DATA` - Path to a JSON array of items (default: unset)
    /// - `CLOUDHUB_PAGE_SIZE` - Default page size (default: 12)
    /// - `CLOUDHUB_LOAD_MORE_STEP` - Load-more increment (default: 12)
    /// - `CLOUDHUB_SEED_COUNT` - Seed item count (default: 24)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_path: lookup("CLOUDHUB_DATA")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            page_size: lookup("CLOUDHUB_PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
            load_more_step: lookup("CLOUDHUB_LOAD_MORE_STEP")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
            seed_count: lookup("CLOUDHUB_SEED_COUNT")
                .and_then(|v| v.parse::<u32>().ok())
                .map(|count| count.min(MAX_SEED_ITEMS))
                .unwrap_or(24),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = config_from(&[]);

        assert_eq!(config.data_path, None);
        assert_eq!(config.page_size, 12);
        assert_eq!(config.load_more_step, 12);
        assert_eq!(config.seed_count, 24);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CLOUDHUB_DATA", "/tmp/items.json"),
            ("CLOUDHUB_PAGE_SIZE", "6"),
            ("CLOUDHUB_LOAD_MORE_STEP", "3"),
            ("CLOUDHUB_SEED_COUNT", "50"),
        ]);

        assert_eq!(config.data_path, Some(PathBuf::from("/tmp/items.json")));
        assert_eq!(config.page_size, 6);
        assert_eq!(config.load_more_step, 3);
        assert_eq!(config.seed_count, 50);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = config_from(&[("CLOUDHUB_PAGE_SIZE", "lots"), ("CLOUDHUB_DATA", "  ")]);

        assert_eq!(config.page_size, 12);
        assert_eq!(config.data_path, None);
    }

    #[test]
    fn test_seed_count_is_capped() {
        let config = config_from(&[("CLOUDHUB_SEED_COUNT", "4000000000")]);
        assert_eq!(config.seed_count, MAX_SEED_ITEMS);
    }
}
