/// Utilities for date formatting in tables
use contracts::shared::timestamp::parse_timestamp;

/// Expiry cell text: `15 Mar 2025`, or `N/A` when the value is missing or
/// cannot be read.
pub fn format_expiry(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Date and time for detail text: `15 Mar 2025, 14:02`
pub fn format_datetime(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_expiry() {
        assert_eq!(format_expiry(Some("2025-03-15T10:00:00Z")), "15 Mar 2025");
        assert_eq!(format_expiry(Some("2025-03-15")), "15 Mar 2025");
        assert_eq!(format_expiry(Some("")), "N/A");
        assert_eq!(format_expiry(Some("soon")), "N/A");
        assert_eq!(format_expiry(None), "N/A");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15 Mar 2024, 14:02");
        assert_eq!(format_datetime("2024-03-15T14:02"), "15 Mar 2024, 14:02");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
