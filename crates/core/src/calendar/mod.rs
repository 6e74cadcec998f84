//! Month grid used by the community calendar view.

mod error;
mod grid;
mod navigation;
mod types;

pub use error::CalendarError;
pub use grid::{
    build_grid_for, build_month_grid, days_in_month, events_on_day, first_weekday,
    group_events_by_date, local_date,
};
pub use navigation::MonthCursor;
pub use types::{CalendarGrid, DayCell, GridCell, Scheduled};
