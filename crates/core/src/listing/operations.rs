use std::collections::BTreeSet;

use super::error::QueryError;
use super::query::{PriceFilter, Query, QueryResult};
use super::sorting::sort_items;
use super::types::{Category, HackathonStatus, Item};

/// Checks free-text search against the item's searchable fields.
///
/// `needle` must already be trimmed and lower-cased (see
/// [`Query::normalized_search`]). An empty needle matches everything.
pub fn matches_search(item: &Item, needle: &str) -> bool {
    needle.is_empty()
        || item
            .searchable_text()
            .any(|text| text.to_lowercase().contains(needle))
}

/// An empty category set matches every item. Otherwise the item must have a
/// category and it must be in the set.
pub fn matches_categories(item: &Item, categories: &BTreeSet<Category>) -> bool {
    categories.is_empty()
        || item
            .category
            .is_some_and(|category| categories.contains(&category))
}

/// An empty tag set matches every item. Otherwise at least one of the item's
/// tags must be in the set, ignoring case.
pub fn matches_tags(item: &Item, tags: &BTreeSet<String>) -> bool {
    if tags.is_empty() {
        return true;
    }
    item.tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        tags.iter().any(|wanted| wanted.to_lowercase() == tag)
    })
}

pub fn matches_price(item: &Item, price_filter: PriceFilter) -> bool {
    match price_filter {
        PriceFilter::All => true,
        PriceFilter::Free => item.is_free(),
        PriceFilter::Paid => !item.is_free(),
    }
}

/// `None` or an empty set matches every item. Otherwise the item must have a
/// status in the set, which excludes plain events.
pub fn matches_status(item: &Item, statuses: Option<&BTreeSet<HackathonStatus>>) -> bool {
    match statuses {
        Some(statuses) if !statuses.is_empty() => item
            .status
            .is_some_and(|status| statuses.contains(&status)),
        _ => true,
    }
}

/// Filters items with every predicate of `query`, keeping input order.
pub fn filter_items<'a>(items: &'a [Item], query: &Query) -> Vec<&'a Item> {
    let needle = query.normalized_search();

    items
        .iter()
        .filter(|item| matches_search(item, &needle))
        .filter(|item| {
            matches_categories(item, &query.categories) && matches_tags(item, &query.tags)
        })
        .filter(|item| matches_price(item, query.price_filter))
        .filter(|item| matches_status(item, query.status_filter.as_ref()))
        .collect()
}

/// Runs a listing query: search, filter, sort and cut one page.
///
/// The result borrows from `items`. Calling this twice with the same inputs
/// gives equal results.
pub fn run_query<'a>(items: &'a [Item], query: &Query) -> Result<QueryResult<'a>, QueryError> {
    query.validate()?;

    let mut matching = filter_items(items, query);
    sort_items(&mut matching, query.sort_by);

    Ok(QueryResult::paginate(matching, query.page_size))
}
