//! Tolerant date parsing for ERP payloads.
//!
//! The backend mixes `YYYY-MM-DD` and `YYYY/MM/DD` separators and sometimes
//! appends a time part. Unparseable input yields `None` rather than an
//! error; callers exclude such rows from date-based classification.

use chrono::NaiveDate;

/// Parse a backend date string, tolerating both separators and a trailing
/// `T...` / ` ...` time part.
pub fn parse_flex(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let date_part = trimmed
        .split(|c| c == 'T' || c == ' ')
        .next()
        .unwrap_or(trimmed);
    let normalized = date_part.replace('/', "-");
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_dash_and_slash_separators() {
        assert_eq!(parse_flex("2024-03-15"), Some(d(2024, 3, 15)));
        assert_eq!(parse_flex("2024/03/15"), Some(d(2024, 3, 15)));
    }

    #[test]
    fn test_time_suffix_ignored() {
        assert_eq!(parse_flex("2024-03-15T14:02:26Z"), Some(d(2024, 3, 15)));
        assert_eq!(parse_flex("2024/03/15 00:00:00"), Some(d(2024, 3, 15)));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(parse_flex(""), None);
        assert_eq!(parse_flex("not a date"), None);
        assert_eq!(parse_flex("2024-13-40"), None);
    }
}
