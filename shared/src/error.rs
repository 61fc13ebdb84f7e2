use thiserror::Error;

/// Errors raised by the calendar domain
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("Invalid month: {0}. Must be between 1 and 12")]
    InvalidMonth(u32),

    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Malformed event data: expected a JSON array of events")]
    NotAnArray,

    #[error("Malformed event data: {0}")]
    MalformedEvents(#[from] serde_json::Error),
}

pub type CalendarResult<T> = Result<T, CalendarError>;
