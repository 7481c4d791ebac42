//! Date helpers for form defaults
//!
//! Everything except [`today`] is a pure function of a calendar date so the
//! defaults can be tested without touching the wall clock.

use chrono::{Datelike, Local, Months, NaiveDate};

/// Wire and `<input type="date">` format
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Default collection year: the year three months from `today`.
/// Rolls over to next year only from October 1st on.
pub fn default_year(today: NaiveDate) -> i32 {
    today
        .checked_add_months(Months::new(3))
        .unwrap_or(today)
        .year()
}

/// Format a date as `yyyy-MM-dd`
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parse `yyyy-MM-dd` as produced by a date input
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_year_same_year_until_october() {
        assert_eq!(default_year(date(2026, 1, 1)), 2026);
        assert_eq!(default_year(date(2026, 9, 30)), 2026);
    }

    #[test]
    fn test_default_year_rolls_over_in_last_quarter() {
        assert_eq!(default_year(date(2026, 10, 1)), 2027);
        assert_eq!(default_year(date(2026, 10, 19)), 2027);
        assert_eq!(default_year(date(2026, 12, 31)), 2027);
    }

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_iso_date(date(2026, 3, 5)), "2026-03-05");
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2026-03-05"), Some(date(2026, 3, 5)));
        assert_eq!(parse_iso_date(" 2026-03-05 "), Some(date(2026, 3, 5)));
        assert_eq!(parse_iso_date("05.03.2026"), None);
        assert_eq!(parse_iso_date(""), None);
    }
}
