//! Timestamp parsing for training status payloads
//!
//! The service has reported timestamps both as RFC3339 and in a US-style
//! `month/day/year` layout, with or without an AM/PM marker. All of them are
//! interpreted as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};

/// `month/day/year` layouts seen in training status payloads.
const US_FORMATS: [&str; 2] = ["%m/%d/%Y %I:%M:%S %p", "%m/%d/%Y %H:%M:%S"];

/// Parses a service timestamp, returning `None` when no known layout matches.
pub fn parse_service_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    US_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn rfc3339_with_offset() {
        let dt = parse_service_timestamp("2019-03-01T10:00:00+02:00").unwrap();
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn us_layout_24h() {
        let dt = parse_service_timestamp("12/21/2017 13:23:35").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2017, 12, 21));
        assert_eq!(dt.hour(), 13);
    }

    #[test]
    fn us_layout_am_pm() {
        let dt = parse_service_timestamp("12/21/2017 12:23:35 PM").unwrap();
        assert_eq!(dt.hour(), 12);
        let dt = parse_service_timestamp("1/2/2018 1:05:00 AM").unwrap();
        assert_eq!((dt.month(), dt.hour(), dt.minute()), (1, 1, 5));
    }

    #[test]
    fn garbage_is_none() {
        assert!(parse_service_timestamp("yesterday").is_none());
        assert!(parse_service_timestamp("").is_none());
    }
}
