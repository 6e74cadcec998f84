//! Query and result types for the listing engine.
//!
//! A `Query` is built fresh by the caller on every interaction (keystroke,
//! filter toggle, "load more"). Nothing here mutates a query in place.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{ParseVariantError, QueryError};
use super::types::{Category, HackathonStatus, Item};

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Ticket price predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceFilter {
    #[default]
    All,
    Free,
    Paid,
}

impl PriceFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceFilter::All => "all",
            PriceFilter::Free => "free",
            PriceFilter::Paid => "paid",
        }
    }
}

impl fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceFilter {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(PriceFilter::All),
            "free" => Ok(PriceFilter::Free),
            "paid" => Ok(PriceFilter::Paid),
            _ => Err(ParseVariantError::new("price filter", s)),
        }
    }
}

/// Ordering applied to the filtered items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Ascending start date.
    #[default]
    #[serde(alias = "upcoming")]
    Date,
    /// Descending popularity, ties by ascending start date.
    #[serde(alias = "trending")]
    Popularity,
    /// Descending creation time.
    Newest,
    PriceAsc,
    PriceDesc,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Date => "date",
            SortBy::Popularity => "popularity",
            SortBy::Newest => "newest",
            SortBy::PriceAsc => "price-asc",
            SortBy::PriceDesc => "price-desc",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" | "upcoming" => Ok(SortBy::Date),
            "popularity" | "trending" => Ok(SortBy::Popularity),
            "newest" => Ok(SortBy::Newest),
            "price-asc" => Ok(SortBy::PriceAsc),
            "price-desc" => Ok(SortBy::PriceDesc),
            _ => Err(QueryError::UnknownSortKey(s.to_string())),
        }
    }
}

/// Search, filter, sort and page-size parameters for one list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Query {
    pub search_text: String,
    /// Empty means every category.
    pub categories: BTreeSet<Category>,
    /// Empty means every tag. Compared case-insensitively.
    pub tags: BTreeSet<String>,
    pub price_filter: PriceFilter,
    /// `None` or an empty set means every status.
    pub status_filter: Option<BTreeSet<HackathonStatus>>,
    pub sort_by: SortBy,
    pub page_size: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            categories: BTreeSet::new(),
            tags: BTreeSet::new(),
            price_filter: PriceFilter::All,
            status_filter: None,
            sort_by: SortBy::Date,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Query {
    /// Creates a query that matches everything, sorted by date.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.extend(categories);
        self
    }

    pub fn with_tag(mut self, tag: impl AsRef<str>) -> Self {
        let tag = tag.as_ref().trim().to_lowercase();
        if !tag.is_empty() {
            self.tags.insert(tag);
        }
        self
    }

    pub fn with_price_filter(mut self, price_filter: PriceFilter) -> Self {
        self.price_filter = price_filter;
        self
    }

    pub fn with_status(mut self, status: HackathonStatus) -> Self {
        self.status_filter.get_or_insert_with(BTreeSet::new).insert(status);
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Returns the query for the next "load more" click: same filters,
    /// page size grown by `step`.
    pub fn load_more(&self, step: usize) -> Self {
        Self {
            page_size: self.page_size.saturating_add(step),
            ..self.clone()
        }
    }

    /// Checks the per-parameter contract.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.page_size == 0 {
            return Err(QueryError::InvalidPageSize);
        }
        Ok(())
    }

    /// Trimmed, lower-cased search text. Empty means "match everything".
    pub fn normalized_search(&self) -> String {
        self.search_text.trim().to_lowercase()
    }
}

/// One page of matching items.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<'a> {
    /// At most `page_size` items, in sorted order.
    pub items: Vec<&'a Item>,
    /// Number of items that matched before truncation.
    pub total_matching: usize,
    pub has_more: bool,
}

impl<'a> QueryResult<'a> {
    /// Truncates an already filtered and sorted list to one page.
    pub fn paginate(mut matching: Vec<&'a Item>, page_size: usize) -> Self {
        let total_matching = matching.len();
        matching.truncate(page_size);
        Self {
            items: matching,
            total_matching,
            has_more: total_matching > page_size,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Titles of the returned items, in order.
    pub fn titles(&self) -> Vec<&'a str> {
        self.items.iter().map(|item| item.title.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_sort_by_accepts_aliases() {
        assert_eq!("date".parse::<SortBy>(), Ok(SortBy::Date));
        assert_eq!("upcoming".parse::<SortBy>(), Ok(SortBy::Date));
        assert_eq!("trending".parse::<SortBy>(), Ok(SortBy::Popularity));
        assert_eq!("Price-Desc".parse::<SortBy>(), Ok(SortBy::PriceDesc));
    }

    #[test]
    fn test_sort_by_unknown_is_invalid_query() {
        assert_eq!(
            "alphabetical".parse::<SortBy>(),
            Err(QueryError::UnknownSortKey("alphabetical".to_string()))
        );
    }

    #[test]
    fn test_price_filter_parse() {
        assert_eq!("FREE".parse::<PriceFilter>(), Ok(PriceFilter::Free));
        assert!("cheap".parse::<PriceFilter>().is_err());
    }

    #[test]
    fn test_query_defaults() {
        let query = Query::new();
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(query.sort_by, SortBy::Date);
        assert_eq!(query.price_filter, PriceFilter::All);
        assert!(query.categories.is_empty());
        assert!(query.status_filter.is_none());
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_zero_page_size_fails_validation() {
        let query = Query::new().with_page_size(0);
        assert_eq!(query.validate(), Err(QueryError::InvalidPageSize));
    }

    #[test]
    fn test_load_more_leaves_original_untouched() {
        let query = Query::new().with_search("ai").with_page_size(6);
        let next = query.load_more(6);

        assert_eq!(query.page_size, 6);
        assert_eq!(next.page_size, 12);
        assert_eq!(next.search_text, "ai");
        assert_eq!(query.load_more(usize::MAX).page_size, usize::MAX);
    }

    #[test]
    fn test_with_tag_normalizes() {
        let query = Query::new().with_tag("  LLM ").with_tag("   ");
        assert_eq!(query.tags.len(), 1);
        assert!(query.tags.contains("llm"));
    }

    #[test]
    fn test_normalized_search() {
        assert_eq!(Query::new().with_search("  AI Summit ").normalized_search(), "ai summit");
        assert_eq!(Query::new().with_search("   ").normalized_search(), "");
    }

    #[test]
    fn test_query_deserializes_from_camel_case() {
        let json = r#"{
            "searchText": "rust",
            "categories": ["tech", "web3"],
            "priceFilter": "paid",
            "statusFilter": ["hacking"],
            "sortBy": "trending",
            "pageSize": 3
        }"#;
        let query: Query = serde_json::from_str(json).unwrap();

        assert_eq!(query.search_text, "rust");
        assert_eq!(query.categories.len(), 2);
        assert_eq!(query.price_filter, PriceFilter::Paid);
        assert_eq!(query.sort_by, SortBy::Popularity);
        assert_eq!(query.page_size, 3);
        assert!(query.tags.is_empty());
    }

    #[test]
    fn test_paginate_counts_before_truncation() {
        let items: Vec<Item> = (0..5)
            .map(|i| Item::event(format!("Item {i}"), Utc::now()))
            .collect();
        let refs: Vec<&Item> = items.iter().collect();

        let page = QueryResult::paginate(refs.clone(), 2);
        assert_eq!(page.len(), 2);
        assert_eq!(page.total_matching, 5);
        assert!(page.has_more);

        let page = QueryResult::paginate(refs, 5);
        assert_eq!(page.len(), 5);
        assert!(!page.has_more);
    }
}
