use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("empty date value")]
    Empty,
    #[error("invalid date `{0}` (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("invalid time `{0}` (expected hh:mm or hh:mm:ss)")]
    InvalidTime(String),
    #[error("unknown calendar system `{0}`")]
    UnknownCalendar(String),
    #[error("malformed calendar annotation in `{0}`")]
    MalformedAnnotation(String),
    #[error("invalid range `{0}` (expected START/END)")]
    InvalidRange(String),
}

pub type Result<T> = std::result::Result<T, DateParseError>;
