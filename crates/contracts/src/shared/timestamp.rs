use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Naive layouts accepted after RFC 3339 fails. `datetime-local` inputs
/// produce the `T`-separated forms without seconds or zone.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a timestamp as the listings service and the browser produce them.
///
/// Zone-less values are read as UTC; a bare date means midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rfc3339_with_offset() {
        let dt = parse_timestamp("2025-03-15T14:00:00+03:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 3, 15, 11, 0, 0).unwrap());
    }

    #[test]
    fn test_datetime_local_forms() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 15, 14, 2, 0).unwrap();
        assert_eq!(parse_timestamp("2025-03-15T14:02"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-15T14:02:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-15 14:02:00"), Some(expected));
        assert!(parse_timestamp("2025-03-15T14:02:00.250").is_some());
    }

    #[test]
    fn test_bare_date_is_midnight_utc() {
        assert_eq!(
            parse_timestamp("2025-03-15"),
            Some(Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
        assert_eq!(parse_timestamp("tomorrow"), None);
        assert_eq!(parse_timestamp("2025-13-40"), None);
    }
}
