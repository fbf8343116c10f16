use chrono::NaiveDate;

use crate::server::error::booking::BookingError;

/// Parses a calendar date in strict `YYYY-MM-DD` form.
///
/// Only zero-padded four-digit years with two-digit months and days are accepted,
/// so inputs such as `2099-1-5` or `10-01-2099` are rejected even where chrono
/// alone would be lenient.
///
/// # Arguments
/// - `value` - The date string to parse
///
/// # Returns
/// - `Ok(NaiveDate)` - Successfully parsed date
/// - `Err(BookingError::InvalidDateFormat)` - Malformed or nonexistent date
pub fn parse_date(value: &str) -> Result<NaiveDate, BookingError> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !well_formed {
        return Err(BookingError::InvalidDateFormat(value.to_string()));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidDateFormat(value.to_string()))
}
