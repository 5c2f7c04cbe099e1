//! Parsing of `DD/MM/YY HHMM` dates

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::config::TWO_DIGIT_YEAR_BASE;
use crate::error::DateError;

static DATE_TIME_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<day>\d{2})/(?P<month>\d{2})/(?P<year>\d{2})\s+(?P<hour>\d{2})(?P<minute>\d{2})$")
        .unwrap(/* this is a valid constant pattern */)
});

/// Parse a `DD/MM/YY HHMM` string into a local date and time.
///
/// `YY` is read as `2000 + YY` (see [`TWO_DIGIT_YEAR_BASE`]). Leading and trailing whitespace is ignored.
pub fn parse_date(input: &str) -> Result<NaiveDateTime, DateError> {
    let input = input.trim();
    let caps = DATE_TIME_FORMAT.captures(input)
        .ok_or_else(|| DateError::Shape(input.to_string()))?;

    // The pattern guarantees these are ASCII digits
    let field = |name: &str| -> u32 {
        caps.name(name)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(u32::MAX)
    };

    let year = TWO_DIGIT_YEAR_BASE + field("year") as i32;
    let date = NaiveDate::from_ymd_opt(year, field("month"), field("day"));
    let time = NaiveTime::from_hms_opt(field("hour"), field("minute"), 0);

    match (date, time) {
        (Some(date), Some(time)) => Ok(date.and_time(time)),
        _ => Err(DateError::OutOfRange(input.to_string())),
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use chrono::Datelike;

    fn date_time(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(parse_date("01/11/21 2359"), Ok(date_time(2021, 11, 1, 23, 59)));
        assert_eq!(parse_date("  29/02/24   0000 "), Ok(date_time(2024, 2, 29, 0, 0)));
    }

    #[test]
    fn test_two_digit_year_window() {
        assert_eq!(parse_date("01/01/00 1200").unwrap().year(), 2000);
        assert_eq!(parse_date("01/01/69 1200").unwrap().year(), 2069);
        assert_eq!(parse_date("31/12/99 1200").unwrap().year(), 2099);
    }

    #[test]
    fn test_malformed_shape() {
        for input in &["", "1/11/21 2359", "01/11/2021 2359", "01-11-21 2359", "01/11/21 23:59", "01/11/21", "01/11/21 2359 extra"] {
            assert!(matches!(parse_date(input), Err(DateError::Shape(_))), "{:?} should be rejected", input);
        }
    }

    #[test]
    fn test_out_of_range() {
        for input in &["31/02/21 1000", "00/01/21 1000", "01/13/21 1000", "01/01/21 2400", "01/01/21 1260", "29/02/21 1000"] {
            assert!(matches!(parse_date(input), Err(DateError::OutOfRange(_))), "{:?} should be rejected", input);
        }
    }
}
