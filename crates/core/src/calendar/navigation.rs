use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::CalendarError;

/// A `(year, month)` pair with a zero-based month, as held by a month view.
///
/// Navigation is plain arithmetic: stepping back from January lands on
/// December of the previous year, stepping forward from December lands on
/// January of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthCursor {
    pub year: i32,
    /// 0 = January, 11 = December.
    pub month: u32,
}

impl MonthCursor {
    /// Creates a cursor, rejecting months outside `0..=11`.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if month > 11 {
            return Err(CalendarError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Returns the cursor for the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 0 {
            Self {
                year: self.year.saturating_sub(1),
                month: 11,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month >= 11 {
            Self {
                year: self.year.saturating_add(1),
                month: 0,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Returns the first day of this month.
    pub fn first_day(self) -> Result<NaiveDate, CalendarError> {
        if self.month > 11 {
            return Err(CalendarError::InvalidMonth(self.month));
        }
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
            .ok_or(CalendarError::YearOutOfRange(self.year))
    }

    /// Returns true if `date` falls inside this month.
    pub fn contains(self, date: NaiveDate) -> bool {
        Self::containing(date) == self
    }
}
