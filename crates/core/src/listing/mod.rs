//! Listing engine behind the explore, events and hackathons pages.
//!
//! `run_query` takes already-fetched items and a [`Query`] and returns one
//! page of results. Steps run in a fixed order: search, category and tag,
//! price, status, stable sort, then pagination.

mod error;
mod mock_data;
mod operations;
mod query;
mod sorting;
mod types;

pub use error::{ParseVariantError, QueryError};
pub use mock_data::{generate_seed_items, MAX_SEED_ITEMS};
pub use operations::{
    filter_items, matches_categories, matches_price, matches_search, matches_status, matches_tags,
    run_query,
};
pub use query::{PriceFilter, Query, QueryResult, SortBy, DEFAULT_PAGE_SIZE};
pub use sorting::sort_items;
pub use types::{Category, HackathonStatus, Item, ItemKind, SearchField, Ticket};
