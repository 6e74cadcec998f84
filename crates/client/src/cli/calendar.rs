//! Calendar CLI command.

use chrono::{Datelike, NaiveDate};
use clap::Parser;
use cloudhub_core::calendar::MonthCursor;

use crate::{ClientError, Result};

/// Month selection for `cloudhub calendar`.
#[derive(Debug, Parser)]
pub struct CalendarCommand {
    /// Year to show (defaults to the current year).
    #[arg(long)]
    pub year: Option<i32>,

    /// Month to show, 1-12 (defaults to the current month).
    #[arg(long)]
    pub month: Option<u32>,

    /// Show the month before the selected one.
    #[arg(long, conflicts_with = "next")]
    pub prev: bool,

    /// Show the month after the selected one.
    #[arg(long)]
    pub next: bool,

    /// Also list the events on this day of the shown month.
    #[arg(long)]
    pub day: Option<u32>,
}

impl CalendarCommand {
    /// Resolves the month to display. `--month` is 1-based on the command
    /// line; the returned cursor is 0-based.
    pub fn resolve_cursor(&self, today: NaiveDate) -> Result<MonthCursor> {
        let current = MonthCursor::containing(today);
        let month = match self.month {
            Some(month @ 1..=12) => month - 1,
            Some(month) => {
                return Err(ClientError::InvalidInput(format!(
                    "month must be between 1 and 12, got {month}"
                )))
            }
            None => current.month,
        };
        let cursor = MonthCursor::new(self.year.unwrap_or(current.year), month)?;

        Ok(if self.prev {
            cursor.previous()
        } else if self.next {
            cursor.next()
        } else {
            cursor
        })
    }

    /// Resolves `--day` against the shown month.
    pub fn selected_date(&self, cursor: MonthCursor) -> Result<Option<NaiveDate>> {
        let Some(day) = self.day else {
            return Ok(None);
        };
        cursor
            .first_day()?
            .with_day(day)
            .map(Some)
            .ok_or_else(|| ClientError::InvalidInput(format!("day {day} is not in this month")))
    }
}
