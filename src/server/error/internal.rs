use thiserror::Error;

/// Internal issues indicating corrupt persisted data or possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum-like column holds a value the application does not know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown value '{value}' stored in column {column}")]
    UnknownStoredValue {
        /// Column the value was read from
        column: &'static str,
        /// The unrecognised value
        value: String,
    },

    /// A stored millisecond timestamp is outside the representable date range.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Timestamp {timestamp} is out of range")]
    TimestampOutOfRange {
        /// The millisecond timestamp that failed to convert
        timestamp: i64,
    },
}
