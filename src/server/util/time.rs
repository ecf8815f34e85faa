use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::server::error::{internal::InternalError, AppError};

/// Renders a message timestamp relative to `now` for conversation lists.
///
/// The timestamp is shown in `now`'s time zone as:
/// - `HH:MM` when it falls on the same calendar day as `now`
/// - `MM-DD` when it falls in the same calendar year
/// - `YYYY-MM-DD` otherwise
///
/// # Arguments
/// - `timestamp_ms` - Milliseconds since the Unix epoch
/// - `now` - Reference time; its time zone is used for the calendar comparison
///
/// # Returns
/// - `Ok(String)` - The formatted time
/// - `Err(AppError::InternalErr(TimestampOutOfRange))` - Timestamp can not be represented
pub fn format_message_time<Tz>(timestamp_ms: i64, now: &DateTime<Tz>) -> Result<String, AppError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let sent = DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .ok_or(InternalError::TimestampOutOfRange {
            timestamp: timestamp_ms,
        })?
        .with_timezone(&now.timezone());

    let pattern = if sent.date_naive() == now.date_naive() {
        "%H:%M"
    } else if sent.year() == now.year() {
        "%m-%d"
    } else {
        "%Y-%m-%d"
    };

    Ok(sent.format(pattern).to_string())
}
