//! Pretty output formatting.
//!
//! ANSI colors are emitted unconditionally; print through `anstream` so they
//! are stripped when stdout is not a terminal.

use chrono::NaiveDate;
use cloudhub_core::calendar::{CalendarGrid, GridCell};
use cloudhub_core::listing::{Item, ItemKind, QueryResult};

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[38;2;158;206;106m";
const BLUE: &str = "\x1b[38;2;122;162;247m";
const YELLOW: &str = "\x1b[38;2;224;175;104m";

fn paint(color: &str, text: &str) -> String {
    format!("{color}{text}{RESET}")
}

/// Format the price line of an item.
pub fn format_price(item: &Item) -> String {
    if item.is_free() {
        return "Free".to_string();
    }
    match item.price() {
        Some(price) if price > 0.0 => format!("From ${price:.2}"),
        _ => "Free tier available".to_string(),
    }
}

/// Format an item for display.
pub fn format_item(item: &Item) -> String {
    let mut output = format!("{} [{}]\n  ID: {}", item.title, item.kind.as_str(), item.id);
    if let Some(organizer) = &item.organizer {
        output.push_str(&format!("\n  Organizer: {}", organizer));
    }
    if let Some(category) = item.category {
        output.push_str(&format!("\n  Category: {}", category));
    }
    if let Some(start) = item.start_date {
        output.push_str(&format!("\n  Starts: {}", start.format("%Y-%m-%d %H:%M UTC")));
    }
    if item.kind == ItemKind::Hackathon {
        if let Some(status) = item.status {
            output.push_str(&format!("\n  Status: {}", status));
        }
    }
    if !item.tags.is_empty() {
        output.push_str(&format!("\n  Tags: {}", item.tags.join(", ")));
    }
    output.push_str(&format!("\n  Price: {}", format_price(item)));
    if let Some(score) = item.popularity_score {
        output.push_str(&format!("\n  Popularity: {}", score));
    }
    output
}

/// Format one page of query results for display.
pub fn format_query_result(result: &QueryResult<'_>) -> String {
    if result.is_empty() {
        return "No items found.".to_string();
    }
    let mut output = format!("ITEMS ({} of {})\n", result.len(), result.total_matching);
    output.push_str(&"-".repeat(40));
    for item in &result.items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    if result.has_more {
        output.push_str(&paint(
            YELLOW,
            &format!("... {} more", result.total_matching - result.len()),
        ));
    }
    output
}

/// Format a month grid as a Sunday-first table. Days with events carry a
/// `*`, today is highlighted.
pub fn format_calendar(grid: &CalendarGrid) -> String {
    let title = grid
        .days()
        .next()
        .map(|cell| cell.date.format("%B %Y").to_string())
        .unwrap_or_default();
    let mut output = format!("{:^27}\n", title);
    output.push_str("Su  Mo  Tu  We  Th  Fr  Sa");

    for week in grid.weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                GridCell::Blank => "   ".to_string(),
                GridCell::Day(day) => {
                    let marker = if day.has_event { "*" } else { " " };
                    let text = format!("{:>2}{}", day.day, marker);
                    if day.is_today {
                        paint(GREEN, &text)
                    } else if day.has_event {
                        paint(BLUE, &text)
                    } else {
                        text
                    }
                }
            })
            .collect();
        output.push('\n');
        output.push_str(row.join(" ").trim_end());
    }
    output
}

/// Format the events of a selected day.
pub fn format_day_events(date: NaiveDate, events: &[&Item]) -> String {
    if events.is_empty() {
        return format!("No events on {}.", date);
    }
    let mut output = format!("EVENTS ON {} ({})\n", date, events.len());
    output.push_str(&"-".repeat(40));
    for item in events {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output
}
