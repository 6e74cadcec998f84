use std::cmp::Ordering;

use super::query::SortBy;
use super::types::Item;

/// Sorts items in place by the given key.
///
/// The sort is stable, so items with equal keys keep their input order. A
/// missing field compares as the smallest value: first when ascending, last
/// when descending. Items without tickets sort as price zero.
pub fn sort_items(items: &mut [&Item], sort_by: SortBy) {
    match sort_by {
        SortBy::Date => items.sort_by(|a, b| a.start_date.cmp(&b.start_date)),
        SortBy::Newest => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Popularity => items.sort_by(|a, b| {
            b.popularity_score
                .cmp(&a.popularity_score)
                .then_with(|| a.start_date.cmp(&b.start_date))
        }),
        SortBy::PriceAsc => items.sort_by(|a, b| compare_price(a, b)),
        SortBy::PriceDesc => items.sort_by(|a, b| compare_price(b, a)),
    }
}

fn compare_price(a: &Item, b: &Item) -> Ordering {
    let a = a.price().unwrap_or(0.0);
    let b = b.price().unwrap_or(0.0);
    a.total_cmp(&b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::types::Ticket;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, month, day, 18, 0, 0).unwrap()
    }

    fn titles(items: &[&Item]) -> Vec<String> {
        items.iter().map(|item| item.title.clone()).collect()
    }

    #[test]
    fn test_sort_by_date_ascending() {
        let items = vec![
            Item::event("March", at(3, 1)),
            Item::event("January", at(1, 1)),
            Item::event("February", at(2, 1)),
        ];
        let mut refs: Vec<&Item> = items.iter().collect();

        sort_items(&mut refs, SortBy::Date);

        assert_eq!(titles(&refs), vec!["January", "February", "March"]);
    }

    #[test]
    fn test_missing_start_date_sorts_first() {
        let items = vec![
            Item::event("Scheduled", at(1, 1)),
            Item::event("Unscheduled", at(1, 1)).unscheduled(),
        ];
        let mut refs: Vec<&Item> = items.iter().collect();

        sort_items(&mut refs, SortBy::Date);

        assert_eq!(titles(&refs), vec!["Unscheduled", "Scheduled"]);
    }

    #[test]
    fn test_newest_descending_missing_last() {
        let items = vec![
            Item::event("No timestamp", at(1, 1)),
            Item::event("Old", at(1, 1)).with_created_at(at(1, 1)),
            Item::event("New", at(1, 1)).with_created_at(at(6, 1)),
        ];
        let mut refs: Vec<&Item> = items.iter().collect();

        sort_items(&mut refs, SortBy::Newest);

        assert_eq!(titles(&refs), vec!["New", "Old", "No timestamp"]);
    }

    #[test]
    fn test_popularity_ties_break_on_start_date() {
        let items = vec![
            Item::event("Late tie", at(5, 1)).with_popularity(10),
            Item::event("Top", at(9, 1)).with_popularity(99),
            Item::event("Early tie", at(2, 1)).with_popularity(10),
            Item::event("Unknown", at(1, 1)),
        ];
        let mut refs: Vec<&Item> = items.iter().collect();

        sort_items(&mut refs, SortBy::Popularity);

        assert_eq!(titles(&refs), vec!["Top", "Early tie", "Late tie", "Unknown"]);
    }

    #[test]
    fn test_price_sorts_treat_no_tickets_as_zero() {
        let items = vec![
            Item::event("Pricey", at(1, 1)).with_ticket(Ticket::new("GA", 50.0)),
            Item::event("No tickets", at(1, 1)),
            Item::event("Cheap", at(1, 1)).with_ticket(Ticket::new("GA", 5.0)),
        ];
        let mut refs: Vec<&Item> = items.iter().collect();

        sort_items(&mut refs, SortBy::PriceAsc);
        assert_eq!(titles(&refs), vec!["No tickets", "Cheap", "Pricey"]);

        sort_items(&mut refs, SortBy::PriceDesc);
        assert_eq!(titles(&refs), vec!["Pricey", "Cheap", "No tickets"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let items: Vec<Item> = ["first", "second", "third", "fourth"]
            .into_iter()
            .map(|title| Item::event(title, at(4, 4)).with_popularity(1))
            .collect();

        for sort_by in [SortBy::Date, SortBy::Popularity, SortBy::PriceAsc, SortBy::PriceDesc] {
            let mut refs: Vec<&Item> = items.iter().collect();
            sort_items(&mut refs, sort_by);
            assert_eq!(titles(&refs), vec!["first", "second", "third", "fourth"]);
        }
    }
}
