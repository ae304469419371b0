use crate::{Error, Result};
use chrono::NaiveDateTime;

/// Timestamps in bureau logs carry no zone information
pub type LogTimestamp = NaiveDateTime;

/// Regex fragment matching the fixed-width `YYYY/MM/DD HH:MM:SS:mmm` token.
///
/// Only the shape is checked here; [`parse_log_timestamp`] validates the values.
pub const LOG_TIMESTAMP_PATTERN: &str = r"\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2}:\d{3}";

/// chrono format of the same token, for parsing and rendering
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S:%3f";

const LOG_TIMESTAMP_LEN: usize = 23;

/// Parse a `YYYY/MM/DD HH:MM:SS:mmm` token.
///
/// Fails when the token has the wrong shape or names an impossible
/// date/time (month 13, hour 25, ...).
pub fn parse_log_timestamp(token: &str) -> Result<LogTimestamp> {
    // chrono accepts unpadded fields; the log format is fixed width
    if token.len() != LOG_TIMESTAMP_LEN {
        return Err(Error::InvalidTimestamp(token.to_string()));
    }

    NaiveDateTime::parse_from_str(token, LOG_TIMESTAMP_FORMAT)
        .map_err(|_| Error::InvalidTimestamp(token.to_string()))
}
