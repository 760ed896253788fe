//! Calendar date key validation

use chrono::{Datelike, NaiveDate};

/// Format of every date key in the mood document
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Check that `s` is a `YYYY-MM-DD` string naming a real calendar date.
///
/// chrono alone accepts unpadded fields and signed years, so the shape is
/// checked byte by byte before parsing.
pub fn is_valid_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return false;
    }

    let well_formed = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !well_formed {
        return false;
    }

    match NaiveDate::parse_from_str(s, DATE_FORMAT) {
        // year 0000 parses in chrono but is not a usable calendar year
        Ok(date) => date.year() >= 1,
        Err(_) => false,
    }
}
