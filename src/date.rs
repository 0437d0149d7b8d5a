use chrono::{Duration, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

pub const DEFAULT_EVENT_DURATION_MINUTES: i64 = 90;

static GERMAN_DATE_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2})\.(\d{1,2})\.(\d{4})\s+(\d{1,2}):(\d{2})").expect("valid date regex")
});

/// Parses a German `D.M.YYYY H:MM` date/time string into a local timestamp.
///
/// The site renders dates without any timezone marker, so the result is a
/// naive local date-time. Input whitespace is collapsed before matching;
/// surrounding text is tolerated.
pub fn parse_german_date_time(raw_value: &str) -> Result<NaiveDateTime> {
    let normalized = raw_value.split_whitespace().collect::<Vec<_>>().join(" ");

    let parse_error = || Error::DateParse {
        value: raw_value.to_string(),
    };

    let captures = GERMAN_DATE_TIME_RE
        .captures(&normalized)
        .ok_or_else(parse_error)?;

    let number = |index: usize| -> Result<u32> {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(parse_error)
    };

    let day = number(1)?;
    let month = number(2)?;
    let year = number(3)? as i32;
    let hour = number(4)?;
    let minute = number(5)?;

    // Digits that match the pattern but name an impossible calendar date
    // (e.g. 32.13.2024) are still a parse failure.
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(parse_error)
}

/// End of an event with the default 90 minute duration.
pub fn default_end(start: NaiveDateTime) -> NaiveDateTime {
    end_after(start, DEFAULT_EVENT_DURATION_MINUTES)
}

pub fn end_after(start: NaiveDateTime, duration_minutes: i64) -> NaiveDateTime {
    start + Duration::minutes(duration_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_two_digit_components() {
        let parsed = parse_german_date_time("12.03.2024 18:30").expect("parse date");
        assert_eq!(
            (
                parsed.year(),
                parsed.month(),
                parsed.day(),
                parsed.hour(),
                parsed.minute()
            ),
            (2024, 3, 12, 18, 30)
        );
    }

    #[test]
    fn parses_single_digit_components() {
        let parsed = parse_german_date_time("1.9.2025 8:05").expect("parse date");
        assert_eq!(
            (
                parsed.year(),
                parsed.month(),
                parsed.day(),
                parsed.hour(),
                parsed.minute()
            ),
            (2025, 9, 1, 8, 5)
        );
    }

    #[test]
    fn collapses_whitespace_before_matching() {
        let parsed = parse_german_date_time("  12.3.2024 \n 18:30 ").expect("parse date");
        assert_eq!(parsed.hour(), 18);
    }

    #[test]
    fn rejects_non_matching_input() {
        let err = parse_german_date_time("tomorrow evening").expect_err("no date");
        match err {
            Error::DateParse { value } => assert_eq!(value, "tomorrow evening"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        assert!(parse_german_date_time("32.13.2024 18:30").is_err());
        assert!(parse_german_date_time("12.3.2024 25:30").is_err());
    }

    #[test]
    fn default_end_is_ninety_minutes_after_start() {
        let start = parse_german_date_time("12.3.2024 18:30").expect("parse date");
        let end = default_end(start);
        assert_eq!(end, start + Duration::minutes(90));
        assert_eq!((end.hour(), end.minute()), (20, 0));
    }

    #[test]
    fn end_after_honors_custom_duration() {
        let start = parse_german_date_time("12.3.2024 18:30").expect("parse date");
        assert_eq!(end_after(start, 0), start);
        assert_eq!(end_after(start, 45), start + Duration::minutes(45));
    }
}
