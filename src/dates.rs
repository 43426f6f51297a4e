//! Date helpers for form defaults and task rows.

use chrono::{DateTime, Datelike, NaiveDate};

/// UTC calendar date of a millisecond timestamp, `YYYY-MM-DD`
pub fn utc_date(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.date_naive().format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn utc_year(millis: i64) -> i32 {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.year())
        .unwrap_or(1970)
}

/// `2024-05-01` -> `May 1`; anything unparseable is returned as given
pub fn short_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_date() {
        // 2024-05-01T23:59:59.999Z
        assert_eq!(utc_date(1_714_607_999_999), "2024-05-01");
        assert_eq!(utc_date(1_714_608_000_000), "2024-05-02");
        assert_eq!(utc_year(1_714_608_000_000), 2024);
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-05-01"), "May 1");
        assert_eq!(short_date("2024-12-25"), "Dec 25");
        assert_eq!(short_date("someday"), "someday");
    }
}
