use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::navigation::MonthCursor;

/// Anything that can be placed on a calendar by its start instant.
pub trait Scheduled {
    /// Start instant, or None when the record has not been scheduled.
    fn start_date(&self) -> Option<DateTime<Utc>>;
}

impl Scheduled for DateTime<Utc> {
    fn start_date(&self) -> Option<DateTime<Utc>> {
        Some(*self)
    }
}

impl<T: Scheduled + ?Sized> Scheduled for &T {
    fn start_date(&self) -> Option<DateTime<Utc>> {
        (**self).start_date()
    }
}

/// A single day in a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    /// Day of month, 1-based.
    pub day: u32,
    pub date: NaiveDate,
    pub has_event: bool,
    pub event_count: usize,
    pub is_today: bool,
}

/// One slot in the 7-column month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GridCell {
    /// Padding before day 1 or after the last day.
    Blank,
    Day(DayCell),
}

impl GridCell {
    pub fn is_blank(&self) -> bool {
        matches!(self, GridCell::Blank)
    }

    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            GridCell::Day(cell) => Some(cell),
            GridCell::Blank => None,
        }
    }
}

/// Month view laid out Sunday-first, seven cells per row.
///
/// Leading blanks equal the weekday of day 1. Trailing blanks pad the last
/// row, so `cells.len()` is always 28, 35 or 42.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarGrid {
    pub year: i32,
    /// 0 = January, 11 = December.
    pub month: u32,
    pub cells: Vec<GridCell>,
}

impl CalendarGrid {
    pub fn cursor(&self) -> MonthCursor {
        MonthCursor {
            year: self.year,
            month: self.month,
        }
    }

    /// Rows of seven cells, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(7)
    }

    /// Iterates the non-blank cells in day order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(GridCell::as_day)
    }

    /// Looks up the cell for a 1-based day of month.
    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.days().find(|cell| cell.day == day)
    }

    pub fn day_count(&self) -> usize {
        self.days().count()
    }

    /// Number of blank cells before day 1.
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_blank()).count()
    }
}
