//! List CLI command.

use clap::Parser;
use cloudhub_core::listing::{
    Category, HackathonStatus, PriceFilter, Query, QueryError, SortBy,
};

use crate::Config;

/// Search, filter and sort parameters for `cloudhub list`.
#[derive(Debug, Parser)]
pub struct ListCommand {
    /// Free-text search over titles (and organizers, for hackathons).
    #[arg(long, short, default_value = "")]
    pub search: String,

    /// Only show this category. Repeat for several.
    #[arg(long = "category", short = 'c')]
    pub categories: Vec<Category>,

    /// Only show items with this tag. Repeat for several.
    #[arg(long = "tag", short = 't')]
    pub tags: Vec<String>,

    /// Price filter: all, free or paid.
    #[arg(long, default_value = "all")]
    pub price: PriceFilter,

    /// Only show hackathons in this status. Repeat for several.
    #[arg(long = "status")]
    pub statuses: Vec<HackathonStatus>,

    /// Sort key: date, upcoming, popularity, trending, newest, price-asc, price-desc.
    #[arg(long, default_value = "date")]
    pub sort: String,

    /// Items per page (defaults to CLOUDHUB_PAGE_SIZE).
    #[arg(long)]
    pub page_size: Option<usize>,

    /// How many pages to show, as if "load more" was clicked.
    #[arg(long, default_value_t = 1)]
    pub pages: usize,
}

impl ListCommand {
    /// Builds the core query, applying one `load_more` per extra page.
    pub fn to_query(&self, config: &Config) -> Result<Query, QueryError> {
        let sort_by: SortBy = self.sort.parse()?;

        let mut query = Query::new()
            .with_search(self.search.as_str())
            .with_categories(self.categories.iter().copied())
            .with_price_filter(self.price)
            .with_sort(sort_by)
            .with_page_size(self.page_size.unwrap_or(config.page_size));
        for tag in &self.tags {
            query = query.with_tag(tag);
        }
        for status in &self.statuses {
            query = query.with_status(*status);
        }

        Ok((1..self.pages).fold(query, |query, _| query.load_more(config.load_more_step)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ListCommand {
        let mut argv = vec!["list"];
        argv.extend_from_slice(args);
        ListCommand::parse_from(argv)
    }

    fn config() -> Config {
        Config::from_lookup(|_| None)
    }

    #[test]
    fn test_defaults_build_match_all_query() {
        let query = parse(&[]).to_query(&config()).unwrap();
        assert_eq!(query, Query::new());
    }

    #[test]
    fn test_filters_are_carried_over() {
        let query = parse(&[
            "--search", "ai", "-c", "ai-ml", "-c", "web3", "--tag", "LLM", "--price", "free",
            "--status", "hacking", "--sort", "trending", "--page-size", "5",
        ])
        .to_query(&config())
        .unwrap();

        assert_eq!(query.search_text, "ai");
        assert!(query.categories.contains(&Category::AiMl));
        assert!(query.categories.contains(&Category::Web3));
        assert!(query.tags.contains("llm"));
        assert_eq!(query.price_filter, PriceFilter::Free);
        assert_eq!(
            query.status_filter.as_ref().map(|s| s.len()),
            Some(1)
        );
        assert_eq!(query.sort_by, SortBy::Popularity);
        assert_eq!(query.page_size, 5);
    }

    #[test]
    fn test_pages_apply_load_more_step() {
        let config = Config::from_lookup(|key| match key {
            "CLOUDHUB_LOAD_MORE_STEP" => Some("4".to_string()),
            _ => None,
        });
        let query = parse(&["--page-size", "4", "--pages", "3"])
            .to_query(&config)
            .unwrap();
        assert_eq!(query.page_size, 12);
    }

    #[test]
    fn test_unknown_sort_key_is_rejected() {
        let err = parse(&["--sort", "alphabetical"])
            .to_query(&config())
            .unwrap_err();
        assert_eq!(err, QueryError::UnknownSortKey("alphabetical".to_string()));
    }

    #[test]
    fn test_unknown_category_fails_parsing() {
        let result = ListCommand::try_parse_from(["list", "--category", "knitting"]);
        assert!(result.is_err());
    }
}
