use std::collections::HashMap;
use std::iter;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

use super::error::CalendarError;
use super::navigation::MonthCursor;
use super::types::{CalendarGrid, DayCell, GridCell, Scheduled};

/// Returns the number of days in a month (`month` is 0-based).
///
/// Computed as "day 0 of the next month": the day before the first of the
/// following month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    let cursor = MonthCursor::new(year, month)?;
    let first = cursor.first_day()?;

    let last = match cursor.next().first_day() {
        Ok(next_first) => next_first.pred_opt(),
        // No following month is representable: only December of the last
        // supported year gets here.
        Err(_) => NaiveDate::from_ymd_opt(first.year(), 12, 31),
    };
    last.map(|last| last.day())
        .ok_or(CalendarError::YearOutOfRange(year))
}

/// Returns the weekday of the first of the month, with Sunday as 0.
pub fn first_weekday(year: i32, month: u32) -> Result<u32, CalendarError> {
    let first = MonthCursor::new(year, month)?.first_day()?;
    Ok(first.weekday().num_days_from_sunday())
}

/// Converts an instant to its calendar date in `tz`.
pub fn local_date<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// Groups events by the local calendar date of their start.
/// Events without a start date are skipped.
pub fn group_events_by_date<'a, E, Tz>(events: &'a [E], tz: &Tz) -> HashMap<NaiveDate, Vec<&'a E>>
where
    E: Scheduled,
    Tz: TimeZone,
{
    let mut grouped: HashMap<NaiveDate, Vec<&E>> = HashMap::new();

    for event in events {
        if let Some(start) = event.start_date() {
            grouped.entry(local_date(start, tz)).or_default().push(event);
        }
    }

    grouped
}

/// Returns the events starting on `date` in `tz`, in input order.
pub fn events_on_day<'a, E, Tz>(events: &'a [E], date: NaiveDate, tz: &Tz) -> Vec<&'a E>
where
    E: Scheduled,
    Tz: TimeZone,
{
    events
        .iter()
        .filter(|event| {
            event
                .start_date()
                .is_some_and(|start| local_date(start, tz) == date)
        })
        .collect()
}

/// Builds the month grid for `(year, month)`, with a 0-based month.
///
/// A day is marked when at least one event starts on that exact local date
/// in `tz`. `today` is compared as a plain date, so the caller decides which
/// zone "today" belongs to.
pub fn build_month_grid<E, Tz>(
    year: i32,
    month: u32,
    events: &[E],
    today: NaiveDate,
    tz: &Tz,
) -> Result<CalendarGrid, CalendarError>
where
    E: Scheduled,
    Tz: TimeZone,
{
    let first = MonthCursor::new(year, month)?.first_day()?;
    let leading = first.weekday().num_days_from_sunday() as usize;
    let total_days = days_in_month(year, month)?;
    let grouped = group_events_by_date(events, tz);

    let mut cells = Vec::with_capacity(42);
    cells.extend(iter::repeat_n(GridCell::Blank, leading));

    for date in first.iter_days().take(total_days as usize) {
        let event_count = grouped.get(&date).map_or(0, Vec::len);
        cells.push(GridCell::Day(DayCell {
            day: date.day(),
            date,
            has_event: event_count > 0,
            event_count,
            is_today: date == today,
        }));
    }

    while cells.len() % 7 != 0 {
        cells.push(GridCell::Blank);
    }

    Ok(CalendarGrid { year, month, cells })
}

/// Builds the grid for the month a cursor points at.
pub fn build_grid_for<E, Tz>(
    cursor: MonthCursor,
    events: &[E],
    today: NaiveDate,
    tz: &Tz,
) -> Result<CalendarGrid, CalendarError>
where
    E: Scheduled,
    Tz: TimeZone,
{
    build_month_grid(cursor.year, cursor.month, events, today, tz)
}
