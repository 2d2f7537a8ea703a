// ABOUTME: Date parsing for front matter `date` and `updated` fields.
// ABOUTME: Accepts plain dates, RFC3339, RFC2822 and naive datetimes, all normalized to UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parses a front matter date string.
/// Returns UTC datetime if successful, None if no format matches.
///
/// Dates without a timezone are taken as UTC; a bare date is midnight UTC.
pub fn parse_content_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // Most front matter uses "2024-01-15"
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let naive_dt = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&naive_dt));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats_naive = [
        // "2024-01-15T10:30:00"
        "%Y-%m-%dT%H:%M:%S",
        // "2024-01-15 10:30:00"
        "%Y-%m-%d %H:%M:%S",
        // "2024-01-15 10:30"
        "%Y-%m-%d %H:%M",
    ];

    for fmt in &formats_naive {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    // "2024/01/15"
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y/%m/%d") {
        let naive_dt = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&naive_dt));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_date_is_midnight_utc() {
        let dt = parse_content_date("2024-01-15").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_rfc3339_with_offset() {
        let dt = parse_content_date("2024-01-15T10:00:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_naive_datetime_assumes_utc() {
        let dt = parse_content_date("2024-01-15 10:30").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_slash_date() {
        assert!(parse_content_date("2024/01/15").is_some());
    }

    #[test]
    fn test_empty_and_invalid() {
        assert!(parse_content_date("").is_none());
        assert!(parse_content_date("   ").is_none());
        assert!(parse_content_date("yesterday").is_none());
        assert!(parse_content_date("2024-13-40").is_none());
    }
}
