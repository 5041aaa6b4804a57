//! UTC date parsing and the calendar breakdown used in post URLs.

use crate::pipeline::PipelineError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serialize;

/// Naive datetime layouts accepted when no offset is given (read as UTC).
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Calendar breakdown of a UTC date.
///
/// `path` is the `/YYYY/MM/DD/` fragment placed between the blog prefix and the slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateInfo {
    pub day: String,
    pub month: String,
    pub year: String,
    pub path: String,
}

impl DateInfo {
    pub fn new(date: DateTime<Utc>) -> Self {
        let year = date.year().to_string();
        let month = format!("{:02}", date.month());
        let day = format!("{:02}", date.day());
        let path = format!("/{year}/{month}/{day}/");

        Self {
            day,
            month,
            year,
            path,
        }
    }
}

/// Parse a date string into a UTC instant.
///
/// Accepts RFC 3339 (`2024-03-05T10:00:00+02:00`, converted to UTC),
/// offset-less datetimes (`2024-03-05T10:00:00`, `2024-03-05 10:00:00`)
/// and plain dates (`2024-03-05`, midnight), the latter two taken as UTC.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>, PipelineError> {
    let value = value.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(date.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| PipelineError::InvalidDate {
            value: value.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_date_info_zero_pads() {
        let info = DateInfo::new(utc(2024, 3, 5, 0, 0, 0));
        assert_eq!(info.year, "2024");
        assert_eq!(info.month, "03");
        assert_eq!(info.day, "05");
        assert_eq!(info.path, "/2024/03/05/");
    }

    #[test]
    fn test_date_info_double_digits() {
        let info = DateInfo::new(utc(2023, 12, 31, 23, 59, 59));
        assert_eq!(info.path, "/2023/12/31/");
    }

    #[test]
    fn test_parse_rfc3339_utc() {
        assert_eq!(
            parse_date("2024-03-05T00:00:00Z").unwrap(),
            utc(2024, 3, 5, 0, 0, 0)
        );
    }

    #[test]
    fn test_parse_rfc3339_offset_normalizes_to_utc() {
        let date = parse_date("2024-03-05T23:30:00-02:00").unwrap();
        assert_eq!(date, utc(2024, 3, 6, 1, 30, 0));
        assert_eq!(DateInfo::new(date).path, "/2024/03/06/");

        let date = parse_date("2024-03-05T01:00:00+05:00").unwrap();
        assert_eq!(DateInfo::new(date).path, "/2024/03/04/");
    }

    #[test]
    fn test_parse_naive_datetime_as_utc() {
        assert_eq!(
            parse_date("2024-03-05T10:20:30").unwrap(),
            utc(2024, 3, 5, 10, 20, 30)
        );
        assert_eq!(
            parse_date("2024-03-05 10:20:30").unwrap(),
            utc(2024, 3, 5, 10, 20, 30)
        );
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_date("2024-02-29").unwrap(), utc(2024, 2, 29, 0, 0, 0));
        assert_eq!(parse_date(" 2024-01-01 ").unwrap(), utc(2024, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_parse_invalid_dates_fail() {
        for value in ["", "yesterday", "2023-02-29", "2024-13-01", "2024-01-32", "2024/01/01"] {
            let err = parse_date(value).unwrap_err();
            assert!(
                matches!(err, PipelineError::InvalidDate { .. }),
                "{value:?} should be rejected"
            );
        }
    }
}
