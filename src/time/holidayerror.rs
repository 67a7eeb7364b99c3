use thiserror::Error;

/// Errors raised while computing holiday dates or building calendars.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HolidayError {
    /// The requested year lies outside the years a holiday can be calculated for.
    #[error("{0}")]
    OutOfRange(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A holiday or a calendar period was configured inconsistently.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl HolidayError {
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, HolidayError::OutOfRange(_))
    }

    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, HolidayError::InvalidConfiguration(_))
    }
}
