//! In-memory filtering, pagination and summary counts for the inventory table.

use chrono::{DateTime, Utc};

use super::aggregate::Listing;
use super::status::{derive_status, ListingStatus};

pub const ITEMS_PER_PAGE: usize = 10;

/// A listing paired with the status shown for it.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow {
    pub listing: Listing,
    pub status: ListingStatus,
}

pub fn with_status(listings: &[Listing], now: DateTime<Utc>) -> Vec<InventoryRow> {
    listings
        .iter()
        .map(|l| InventoryRow {
            listing: l.clone(),
            status: derive_status(l, now),
        })
        .collect()
}

/// Table filters. `None` means "All".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryFilter {
    pub search: String,
    pub category: Option<String>,
    pub status: Option<ListingStatus>,
}

impl InventoryFilter {
    pub fn matches(&self, row: &InventoryRow) -> bool {
        let needle = self.search.trim().to_lowercase();
        let listing = &row.listing;

        let search_ok = needle.is_empty()
            || [
                Some(listing.product_type.as_str()),
                listing.category.as_deref(),
                listing.description.as_deref(),
            ]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle));

        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| listing.category_name() == c);

        let status_ok = self.status.map_or(true, |s| row.status == s);

        search_ok && category_ok && status_ok
    }

    pub fn apply(&self, rows: &[InventoryRow]) -> Vec<InventoryRow> {
        rows.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// One page of results. `page` is 1-based; `page_count` is zero for no items.
/// `first` is the 1-based position of the first item, zero when empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_count: usize,
    pub first: usize,
    pub total: usize,
}

impl<T> Page<T> {
    /// Footer text, e.g. `Showing 11-20 of 23 items`.
    pub fn caption(&self) -> String {
        match self.items.len() {
            0 => format!("Showing 0 of {} items", self.total),
            n => format!("Showing {}-{} of {} items", self.first, self.first + n - 1, self.total),
        }
    }
}

/// Slice `items` for the requested page, clamping it into `1..=page_count`.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total = items.len();
    let page_count = total.div_ceil(per_page);
    let page = page.clamp(1, page_count.max(1));
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total);

    let items = items.get(start..end).map(<[T]>::to_vec).unwrap_or_default();
    let first = if items.is_empty() { 0 } else { start + 1 };

    Page {
        items,
        page,
        page_count,
        first,
        total,
    }
}

/// Counts for the summary cards. `total_items` covers every fetched listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventorySummary {
    pub total_items: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

impl InventorySummary {
    pub fn from_rows(rows: &[InventoryRow]) -> Self {
        let count = |status| rows.iter().filter(|r| r.status == status).count();
        InventorySummary {
            total_items: rows.len(),
            expiring_soon: count(ListingStatus::ExpiringSoon),
            expired: count(ListingStatus::Expired),
        }
    }
}

/// Distinct non-empty categories in first-seen order.
pub fn category_options(listings: &[Listing]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in listings.iter().map(Listing::category_name) {
        if !name.is_empty() && !out.iter().any(|c| c == name) {
            out.push(name.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_listing::aggregate::ListingId;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    fn listing(id: i64, category: &str, expiry: &str) -> Listing {
        Listing {
            listing_id: ListingId(id),
            product_type: if id % 2 == 0 { "edible" } else { "inedible" }.into(),
            quantity: id as f64,
            unit: Some("kg".into()),
            category: (!category.is_empty()).then(|| category.to_string()),
            description: Some(format!("item number {id}")),
            original_price: None,
            discounted_price: None,
            expiry_date: Some(expiry.to_string()),
            pickup_window_duration: None,
            upload_method: Some("manual".into()),
            image: None,
            status: None,
        }
    }

    fn sample() -> Vec<Listing> {
        vec![
            listing(1, "Bakery", "2025-03-01"),
            listing(2, "Dairy", "2025-03-11"),
            listing(3, "Bakery", "2025-05-01"),
            listing(4, "", "2025-05-01"),
            listing(5, "Produce", "2025-03-12"),
        ]
    }

    #[test]
    fn test_summary_counts() {
        let rows = with_status(&sample(), now());
        assert_eq!(
            InventorySummary::from_rows(&rows),
            InventorySummary {
                total_items: 5,
                expiring_soon: 2,
                expired: 1,
            }
        );
    }

    #[test]
    fn test_filters_combine() {
        let rows = with_status(&sample(), now());

        let filter = InventoryFilter {
            category: Some("Bakery".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&rows).len(), 2);

        let filter = InventoryFilter {
            category: Some("Bakery".into()),
            status: Some(ListingStatus::Available),
            ..Default::default()
        };
        let found = filter.apply(&rows);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].listing.listing_id, ListingId(3));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let rows = with_status(&sample(), now());

        let by_type = InventoryFilter {
            search: "INEDIBLE".into(),
            ..Default::default()
        };
        assert_eq!(by_type.apply(&rows).len(), 3);

        let by_category = InventoryFilter {
            search: "dai".into(),
            ..Default::default()
        };
        assert_eq!(by_category.apply(&rows).len(), 1);

        let by_description = InventoryFilter {
            search: " number 4 ".into(),
            ..Default::default()
        };
        assert_eq!(by_description.apply(&rows)[0].listing.listing_id, ListingId(4));
    }

    #[test]
    fn test_paginate_clamps_page() {
        let items: Vec<usize> = (1..=23).collect();

        let first = paginate(&items, 1, ITEMS_PER_PAGE);
        assert_eq!(first.page_count, 3);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.first, 1);

        let last = paginate(&items, 3, ITEMS_PER_PAGE);
        assert_eq!(last.items, vec![21, 22, 23]);
        assert_eq!(last.page, last.page_count);
        assert_eq!(last.caption(), "Showing 21-23 of 23 items");
        assert_eq!(paginate(&items, 2, ITEMS_PER_PAGE).caption(), "Showing 11-20 of 23 items");

        assert_eq!(paginate(&items, 0, ITEMS_PER_PAGE).page, 1);
        assert_eq!(paginate(&items, 99, ITEMS_PER_PAGE).page, 3);
    }

    #[test]
    fn test_paginate_empty() {
        let page = paginate::<u8>(&[], 4, ITEMS_PER_PAGE);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_count, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.first, 0);
        assert_eq!(page.caption(), "Showing 0 of 0 items");
    }

    #[test]
    fn test_category_options_distinct_in_order() {
        assert_eq!(category_options(&sample()), vec!["Bakery", "Dairy", "Produce"]);
    }
}
