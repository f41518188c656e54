//! ISO-8601 timestamp rendering and parsing.
//!
//! SPDX timestamps are always written in UTC as `YYYY-MM-DDThh:mm:ssZ`.

use chrono::{DateTime, SecondsFormat, Timelike, Utc};

pub fn datetime_to_iso_string(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parses any RFC 3339 timestamp, normalised to UTC with whole seconds.
pub fn datetime_from_str(date_str: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let parsed = DateTime::parse_from_rfc3339(date_str)?.with_timezone(&Utc);
    Ok(parsed.with_nanosecond(0).unwrap_or(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_renders_utc_without_fraction() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 5).unwrap();
        assert_eq!(datetime_to_iso_string(&date), "2024-01-01T12:30:05Z");
    }

    #[test]
    fn test_parses_and_normalises() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        assert_eq!(datetime_from_str("2024-01-01T10:00:00Z").unwrap(), expected);
        assert_eq!(datetime_from_str("2024-01-01T12:00:00.750+02:00").unwrap(), expected);
        assert!(datetime_from_str("01/01/2024").is_err());
    }
}
