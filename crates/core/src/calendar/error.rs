use thiserror::Error;

/// Errors that can occur when building or navigating a month grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid month: {0} (expected 0-11)")]
    InvalidMonth(u32),
    #[error("Year out of supported range: {0}")]
    YearOutOfRange(i32),
}
