//! Mock data generation for demos and tests.
//!
//! Pure functions only: the same center date and count always produce the
//! same items, ids included.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use super::types::{Category, HackathonStatus, Item, Ticket};

/// Largest number of items [`generate_seed_items`] will produce.
pub const MAX_SEED_ITEMS: u32 = 10_000;

/// Generate a mix of events and hackathons around a center date.
///
/// Roughly 60% events and 40% hackathons, spread over five weeks either side
/// of `center_date`. Every third event is paid, every fifth event mixes a
/// free and a paid tier. `count` is capped at [`MAX_SEED_ITEMS`].
///
/// # Example
///
/// ```
/// use cloudhub_core::listing::generate_seed_items;
/// use chrono::NaiveDate;
///
/// let center = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let items = generate_seed_items(center, 20);
///
/// assert_eq!(items.len(), 20);
/// ```
pub fn generate_seed_items(center_date: NaiveDate, count: u32) -> Vec<Item> {
    let midnight = center_date.and_time(NaiveTime::MIN).and_utc();
    let count = count.min(MAX_SEED_ITEMS);
    let event_count = count.saturating_mul(3).div_ceil(5);
    let hackathon_count = count.saturating_sub(event_count);

    let mut items = Vec::with_capacity(count as usize);

    let event_titles = [
        "AI Summit",
        "Web3 Meetup",
        "Design Systems Night",
        "Founder Breakfast",
        "Rust Workshop",
        "Community Picnic",
        "Data Science Bootcamp",
        "Indie Game Showcase",
    ];
    let event_categories = [
        Category::AiMl,
        Category::Web3,
        Category::Design,
        Category::Business,
        Category::Tech,
        Category::Community,
        Category::Education,
        Category::Gaming,
    ];
    for i in 0..event_count {
        let idx = i as usize % event_titles.len();
        let start = shifted(midnight, i as i64 * 3 - 15, 18);
        let mut item = Item::event(event_titles[idx], start)
            .with_id(format!("evt-{:03}", i + 1))
            .with_category(event_categories[idx])
            .with_tag(event_categories[idx].as_str())
            .with_created_at(shifted(start, -(30 + i as i64), 0))
            .with_popularity(u64::from((i * 37) % 250));

        if i % 5 == 4 {
            item = item
                .with_ticket(Ticket::free("Community"))
                .with_ticket(Ticket::new("Supporter", 25.0));
        } else if i % 3 == 2 {
            item = item.with_ticket(Ticket::new("General", 10.0 + f64::from(i % 4) * 5.0));
        } else if i % 2 == 0 {
            item = item.with_ticket(Ticket::free("General"));
        }
        items.push(item);
    }

    let hackathon_titles = [
        "Climate Hack",
        "LLM Build Week",
        "DeFi Sprint",
        "HealthTech Challenge",
        "Open Source Jam",
    ];
    let hackathon_categories = [
        Category::Sustainability,
        Category::AiMl,
        Category::Web3,
        Category::Health,
        Category::Tech,
    ];
    let organizers = ["GreenGrid", "Neural Forge", "Chain Collective", "MedLab", "OSS Guild"];
    for i in 0..hackathon_count {
        let idx = i as usize % hackathon_titles.len();
        let offset = i as i64 * 5 - 20;
        let start = shifted(midnight, offset, 9);
        let status = status_for_offset(offset);
        let mut item = Item::hackathon(hackathon_titles[idx], organizers[idx], start)
            .with_id(format!("hack-{:03}", i + 1))
            .with_category(hackathon_categories[idx])
            .with_status(status)
            .with_created_at(shifted(start, -60, 0))
            .with_popularity(u64::from((i * 53 + 20) % 400));
        if i % 4 == 3 {
            item = item.with_ticket(Ticket::new("Team", 40.0));
        }
        items.push(item);
    }

    items
}

/// Moves `base` by whole days and hours, staying put when the result would
/// leave the representable date range.
fn shifted(base: DateTime<Utc>, days: i64, hours: i64) -> DateTime<Utc> {
    Duration::try_days(days)
        .zip(Duration::try_hours(hours))
        .and_then(|(days, hours)| base.checked_add_signed(days)?.checked_add_signed(hours))
        .unwrap_or(base)
}

/// Picks a plausible lifecycle stage from how far the start lies from the
/// center date.
fn status_for_offset(days_from_center: i64) -> HackathonStatus {
    match days_from_center {
        d if d < -10 => HackathonStatus::Completed,
        d if d < -3 => HackathonStatus::Judging,
        d if d < 0 => HackathonStatus::Hacking,
        d if d < 10 => HackathonStatus::RegistrationOpen,
        _ => HackathonStatus::Draft,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ItemKind;

    fn center() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_generate_seed_items_count() {
        assert_eq!(generate_seed_items(center(), 20).len(), 20);
        assert_eq!(generate_seed_items(center(), 1).len(), 1);
        assert!(generate_seed_items(center(), 0).is_empty());
    }

    #[test]
    fn test_generate_seed_items_distribution() {
        let items = generate_seed_items(center(), 100);
        let events = items.iter().filter(|i| i.kind == ItemKind::Event).count();
        let hackathons = items.iter().filter(|i| i.kind == ItemKind::Hackathon).count();

        assert_eq!(events, 60);
        assert_eq!(hackathons, 40);
        assert!(items
            .iter()
            .filter(|i| i.kind == ItemKind::Hackathon)
            .all(|i| i.status.is_some() && i.organizer.is_some()));
    }

    #[test]
    fn test_generate_seed_items_is_deterministic() {
        assert_eq!(generate_seed_items(center(), 30), generate_seed_items(center(), 30));
    }

    #[test]
    fn test_generate_seed_items_has_free_paid_and_mixed() {
        let items = generate_seed_items(center(), 30);
        assert!(items.iter().any(|i| i.tickets.is_empty()));
        assert!(items.iter().any(|i| !i.is_free()));
        assert!(items
            .iter()
            .any(|i| i.tickets.len() == 2 && i.price() == Some(0.0) && !i.is_free()));
    }

    #[test]
    fn test_status_for_offset() {
        assert_eq!(status_for_offset(-20), HackathonStatus::Completed);
        assert_eq!(status_for_offset(-5), HackathonStatus::Judging);
        assert_eq!(status_for_offset(-1), HackathonStatus::Hacking);
        assert_eq!(status_for_offset(5), HackathonStatus::RegistrationOpen);
        assert_eq!(status_for_offset(30), HackathonStatus::Draft);
    }

    #[test]
    fn test_generate_seed_items_caps_count() {
        let items = generate_seed_items(center(), u32::MAX);
        assert_eq!(items.len(), MAX_SEED_ITEMS as usize);
    }

    #[test]
    fn test_generate_seed_items_near_the_end_of_time() {
        let items = generate_seed_items(NaiveDate::MAX, 50);
        assert_eq!(items.len(), 50);
        assert!(items.iter().all(|item| item.start_date.is_some()));
    }
}
