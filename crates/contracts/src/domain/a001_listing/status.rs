use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::aggregate::Listing;

/// Listings expiring within this many days are flagged "Expiring Soon".
pub const EXPIRING_SOON_DAYS: i64 = 3;

pub fn is_expired(expiry: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    expiry < now
}

/// True when `expiry` lies between `now` and `now + days`, both inclusive.
pub fn is_expiring_soon(expiry: DateTime<Utc>, now: DateTime<Utc>, days: i64) -> bool {
    let left = expiry - now;
    left >= Duration::zero() && left <= Duration::days(days)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    Available,
    ExpiringSoon,
    Expired,
    Recycled,
}

impl ListingStatus {
    pub const ALL: [ListingStatus; 4] = [
        ListingStatus::Available,
        ListingStatus::ExpiringSoon,
        ListingStatus::Expired,
        ListingStatus::Recycled,
    ];

    /// Value used in `<select>` options.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Available => "available",
            ListingStatus::ExpiringSoon => "expiring_soon",
            ListingStatus::Expired => "expired",
            ListingStatus::Recycled => "recycled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::Available => "Available",
            ListingStatus::ExpiringSoon => "Expiring Soon",
            ListingStatus::Expired => "Expired",
            ListingStatus::Recycled => "Recycled",
        }
    }

    /// Badge class, styled in `styles/inventory.css`.
    pub fn css_class(&self) -> &'static str {
        match self {
            ListingStatus::Available => "badge badge--available",
            ListingStatus::ExpiringSoon => "badge badge--expiring",
            ListingStatus::Expired => "badge badge--expired",
            ListingStatus::Recycled => "badge badge--recycled",
        }
    }

    /// Accepts the option value or the label, ignoring case:
    /// `expiring_soon`, `Expiring Soon` and `expiring soon` all match.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s) || v.label().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Status shown on the dashboard.
///
/// A stored "expired" or a past expiry date wins, then the expiring-soon
/// window, then any other recognised stored status. Listings without a
/// readable expiry are never expired by date.
pub fn derive_status(listing: &Listing, now: DateTime<Utc>) -> ListingStatus {
    let stored = listing.status.as_deref().and_then(ListingStatus::parse);
    let expiry = listing.expiry();

    if stored == Some(ListingStatus::Expired) || expiry.is_some_and(|e| is_expired(e, now)) {
        return ListingStatus::Expired;
    }
    if expiry.is_some_and(|e| is_expiring_soon(e, now, EXPIRING_SOON_DAYS)) {
        return ListingStatus::ExpiringSoon;
    }
    match stored {
        Some(ListingStatus::Recycled) => ListingStatus::Recycled,
        _ => ListingStatus::Available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_listing::aggregate::ListingId;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    fn listing(expiry: Option<&str>, status: Option<&str>) -> Listing {
        Listing {
            listing_id: ListingId(1),
            product_type: "edible".into(),
            quantity: 1.0,
            unit: None,
            category: None,
            description: None,
            original_price: None,
            discounted_price: None,
            expiry_date: expiry.map(String::from),
            pickup_window_duration: None,
            upload_method: None,
            image: None,
            status: status.map(String::from),
        }
    }

    #[test]
    fn test_expiring_soon_window_is_inclusive() {
        let now = now();
        assert!(is_expiring_soon(now, now, 3));
        assert!(is_expiring_soon(now + Duration::days(3), now, 3));
        assert!(!is_expiring_soon(now + Duration::days(3) + Duration::seconds(1), now, 3));
        assert!(!is_expiring_soon(now - Duration::seconds(1), now, 3));
    }

    #[test]
    fn test_derive_from_expiry_date() {
        let now = now();
        assert_eq!(
            derive_status(&listing(Some("2025-03-09T12:00:00Z"), None), now),
            ListingStatus::Expired
        );
        assert_eq!(
            derive_status(&listing(Some("2025-03-12"), None), now),
            ListingStatus::ExpiringSoon
        );
        assert_eq!(
            derive_status(&listing(Some("2025-04-01T00:00"), None), now),
            ListingStatus::Available
        );
    }

    #[test]
    fn test_stored_status_overrides() {
        let now = now();
        assert_eq!(
            derive_status(&listing(Some("2025-04-01"), Some("Expired")), now),
            ListingStatus::Expired
        );
        assert_eq!(
            derive_status(&listing(Some("2025-04-01"), Some("recycled")), now),
            ListingStatus::Recycled
        );
        // a close expiry still reads as expiring soon
        assert_eq!(
            derive_status(&listing(Some("2025-03-11"), Some("recycled")), now),
            ListingStatus::ExpiringSoon
        );
        assert_eq!(
            derive_status(&listing(Some("2025-04-01"), Some("claimed")), now),
            ListingStatus::Available
        );
    }

    #[test]
    fn test_missing_or_bad_expiry_is_available() {
        let now = now();
        assert_eq!(derive_status(&listing(None, None), now), ListingStatus::Available);
        assert_eq!(
            derive_status(&listing(Some("soon"), None), now),
            ListingStatus::Available
        );
    }

    #[test]
    fn test_parse_accepts_value_and_label() {
        assert_eq!(ListingStatus::parse("expiring_soon"), Some(ListingStatus::ExpiringSoon));
        assert_eq!(ListingStatus::parse("Expiring Soon"), Some(ListingStatus::ExpiringSoon));
        assert_eq!(ListingStatus::parse(" AVAILABLE "), Some(ListingStatus::Available));
        assert_eq!(ListingStatus::parse(""), None);
    }
}
