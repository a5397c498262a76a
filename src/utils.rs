//! Date and time normalization helpers.
//!
//! The three sources disagree about date formats: NewsAPI hands back
//! ISO-8601 UTC timestamps, Nikkei Medical prints `YYYY/MM/DD`, and Jiji
//! Medical prints `YYYY/MM/DD HH:MM`. These two functions bridge those
//! formats to a JST display string and to a plain date value. Both are
//! total: bad input comes back as the original string or `None`, never
//! as an error.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime};
use tracing::warn;

const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Convert a strict ISO-8601 UTC timestamp to a JST display string.
///
/// `"2025-03-29T12:00:00Z"` becomes `"2025/03/29 21:00"`. Input that does
/// not match `%Y-%m-%dT%H:%M:%SZ` exactly is returned unchanged, so the
/// caller can always render *something* in the date column.
pub fn convert_utc_to_jst(utc_str: &str) -> String {
    match NaiveDateTime::parse_from_str(utc_str, "%Y-%m-%dT%H:%M:%SZ") {
        Ok(dt) => {
            let jst = FixedOffset::east_opt(JST_OFFSET_SECS)
                .map(|offset| dt.and_utc().with_timezone(&offset));
            match jst {
                Some(dt_japan) => dt_japan.format("%Y/%m/%d %H:%M").to_string(),
                None => utc_str.to_string(),
            }
        }
        Err(_) => utc_str.to_string(),
    }
}

/// Parse a source-formatted date string into a date value.
///
/// Tries `YYYY/MM/DD HH:MM` (Jiji) first, then `YYYY/MM/DD` (Nikkei),
/// discarding any time of day. Empty input or any other format yields
/// `None`, which callers must treat as "unknown date" rather than an
/// error.
pub fn parse_date(raw_date: &str) -> Option<NaiveDate> {
    if raw_date.is_empty() {
        return None;
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw_date, "%Y/%m/%d %H:%M") {
        return Some(dt.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw_date, "%Y/%m/%d") {
        return Some(date);
    }

    warn!(input = raw_date, "Failed to parse date");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_utc_to_jst() {
        assert_eq!(convert_utc_to_jst("2025-03-29T12:00:00Z"), "2025/03/29 21:00");
    }

    #[test]
    fn test_convert_utc_to_jst_crosses_midnight() {
        assert_eq!(convert_utc_to_jst("2025-03-29T20:30:00Z"), "2025/03/30 05:30");
    }

    #[test]
    fn test_convert_utc_to_jst_malformed_input_unchanged() {
        assert_eq!(convert_utc_to_jst("not a timestamp"), "not a timestamp");
        assert_eq!(convert_utc_to_jst(""), "");
        // Offset form is not the strict Z-suffixed format.
        assert_eq!(
            convert_utc_to_jst("2025-03-29T12:00:00+00:00"),
            "2025-03-29T12:00:00+00:00"
        );
    }

    #[test]
    fn test_parse_date_with_time() {
        assert_eq!(
            parse_date("2025/03/29 12:00"),
            NaiveDate::from_ymd_opt(2025, 3, 29)
        );
    }

    #[test]
    fn test_parse_date_date_only() {
        assert_eq!(parse_date("2025/03/29"), NaiveDate::from_ymd_opt(2025, 3, 29));
    }

    #[test]
    fn test_parse_date_invalid() {
        assert_eq!(parse_date("abc123"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2025-03-29"), None);
    }
}
