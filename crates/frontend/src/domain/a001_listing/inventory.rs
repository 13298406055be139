use contracts::domain::a001_listing::Listing;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

/// Listings fetched from the backend plus request state.
#[derive(Clone, Copy)]
pub struct InventoryStore {
    pub listings: RwSignal<Vec<Listing>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self {
            listings: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Re-fetch every listing. On failure the previous list is kept.
    pub fn refresh(&self) {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);

        spawn_local(async move {
            match api::fetch_listings().await {
                Ok(listings) => {
                    log::debug!("Loaded {} listings", listings.len());
                    this.listings.set(listings);
                }
                Err(e) => this.error.set(Some(e)),
            }
            this.loading.set(false);
        });
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Store that starts fetching immediately.
pub fn use_inventory() -> InventoryStore {
    let store = InventoryStore::new();
    store.refresh();
    store
}
