use contracts::domain::a001_listing::query::InventoryFilter;
use contracts::domain::a001_listing::ListingStatus;
use leptos::prelude::*;

/// Select value meaning "no filter"
pub const ALL_VALUE: &str = "";

pub fn category_from_select(value: &str) -> Option<String> {
    (value != ALL_VALUE).then(|| value.to_string())
}

pub fn status_from_select(value: &str) -> Option<ListingStatus> {
    ListingStatus::parse(value)
}

/// Filter and page state of the inventory table. Every filter change
/// returns to page 1.
#[derive(Clone, Copy)]
pub struct ListState {
    pub search: RwSignal<String>,
    pub category: RwSignal<Option<String>>,
    pub status: RwSignal<Option<ListingStatus>>,
    pub page: RwSignal<usize>,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            search: RwSignal::new(String::new()),
            category: RwSignal::new(None),
            status: RwSignal::new(None),
            page: RwSignal::new(1),
        }
    }

    /// Current filter; tracks all three filter signals.
    pub fn filter(&self) -> InventoryFilter {
        InventoryFilter {
            search: self.search.get(),
            category: self.category.get(),
            status: self.status.get(),
        }
    }

    pub fn set_search(&self, value: String) {
        self.search.set(value);
        self.page.set(1);
    }

    pub fn set_category(&self, value: &str) {
        self.category.set(category_from_select(value));
        self.page.set(1);
    }

    pub fn set_status(&self, value: &str) {
        self.status.set(status_from_select(value));
        self.page.set(1);
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}
