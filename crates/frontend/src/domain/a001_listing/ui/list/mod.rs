mod state;

pub use state::ListState;

use chrono::Utc;
use contracts::domain::a001_listing::query::{
    category_options, paginate, with_status, InventoryRow, InventorySummary, ITEMS_PER_PAGE,
};
use contracts::domain::a001_listing::status::EXPIRING_SOON_DAYS;
use contracts::domain::a001_listing::ListingStatus;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use super::upload_chooser::{UploadDialog, UploadStage};
use crate::domain::a001_listing::inventory::use_inventory;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::date_utils::{format_datetime, format_expiry};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal::use_modal;
use state::ALL_VALUE;

const COLUMN_COUNT: &str = "5";

#[component]
fn MessageRow(text: &'static str, #[prop(optional)] error: bool) -> impl IntoView {
    view! {
        <tr>
            <td colspan=COLUMN_COUNT class="table__message" class:table__message--error=error>
                {text}
            </td>
        </tr>
    }
}

#[component]
fn ListingRow(row: InventoryRow) -> impl IntoView {
    let listing = row.listing;
    let expiry_title = listing
        .expiry_date
        .as_deref()
        .map(format_datetime)
        .unwrap_or_default();

    view! {
        <tr class="table__row">
            <td>
                <div class="item-cell__type">{listing.product_type.clone()}</div>
                {listing.description.clone().map(|d| view! { <div class="item-cell__description">{d}</div> })}
            </td>
            <td>{listing.quantity_label()}</td>
            <td>{listing.category_name().to_string()}</td>
            <td title=expiry_title>{format_expiry(listing.expiry_date.as_deref())}</td>
            <td>
                <span class=row.status.css_class()>{row.status.label()}</span>
            </td>
        </tr>
    }
}

/// Inventory page: summary cards, filters, listing table and upload dialog.
#[component]
pub fn InventoryList() -> impl IntoView {
    let store = use_inventory();
    let state = ListState::new();
    let modal = use_modal::<UploadStage>();

    let rows = Memo::new(move |_| store.listings.with(|l| with_status(l, Utc::now())));
    let summary = Memo::new(move |_| rows.with(|r| InventorySummary::from_rows(r)));
    let categories = Memo::new(move |_| store.listings.with(|l| category_options(l)));
    let filtered = Memo::new(move |_| {
        let filter = state.filter();
        rows.with(|r| filter.apply(r))
    });
    let page = Memo::new(move |_| {
        let requested = state.page.get();
        filtered.with(|items| paginate(items, requested, ITEMS_PER_PAGE))
    });

    // counts read "-" only before the first load finishes
    let count = move |pick: fn(&InventorySummary) -> usize| {
        Signal::derive(move || {
            let pending = store.loading.get() && store.listings.with(Vec::is_empty);
            (!pending).then(|| summary.with(pick))
        })
    };

    let on_uploaded = Callback::new(move |_| {
        modal.close();
        store.refresh();
    });

    view! {
        <div class="page inventory-page">
            <PageHeader title="Inventory Management" />

            <div class="summary-cards">
                <StatCard
                    label="Total items"
                    icon_name="box"
                    value=count(|s| s.total_items)
                    tone=StatTone::Neutral
                    subtitle="across all categories"
                />
                <StatCard
                    label="Expiring soon"
                    icon_name="clock"
                    value=count(|s| s.expiring_soon)
                    tone=StatTone::Warning
                    subtitle=format!("expiring within {} days", EXPIRING_SOON_DAYS)
                />
                <StatCard
                    label="Expired items"
                    icon_name="alert"
                    value=count(|s| s.expired)
                    tone=StatTone::Danger
                    subtitle="past their expiry date"
                />
            </div>

            <div class="filter-bar">
                <SearchInput
                    placeholder="Search..."
                    on_change=Callback::new(move |text: String| state.set_search(text))
                />
                <select
                    class="filter-bar__select"
                    on:change=move |ev| state.set_category(&event_target_value(&ev))
                >
                    <option value=ALL_VALUE>"All"</option>
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                            .collect_view()
                    }}
                </select>
                <select
                    class="filter-bar__select"
                    on:change=move |ev| state.set_status(&event_target_value(&ev))
                >
                    <option value=ALL_VALUE>"All status"</option>
                    {ListingStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
                <div class="filter-bar__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| modal.open_with(UploadStage::Chooser)
                    >
                        {icon("upload")}
                        " Upload"
                    </Button>
                </div>
            </div>

            <div class="table-wrapper">
                <table class="table inventory-table">
                    <thead>
                        <tr>
                            <th>"Item"</th>
                            <th>"Quantity"</th>
                            <th>"Category"</th>
                            <th>"Expiry"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if store.loading.get() {
                                Some(view! { <MessageRow text="Loading..." /> }.into_any())
                            } else if store.error.with(Option::is_some) {
                                Some(view! { <MessageRow text="Failed to load listings." error=true /> }.into_any())
                            } else if page.with(|p| p.items.is_empty()) {
                                Some(view! { <MessageRow text="No items found." /> }.into_any())
                            } else {
                                None
                            }
                        }}
                        <For
                            each=move || {
                                let ready = !store.loading.get() && store.error.with(Option::is_none);
                                if ready { page.get().items } else { Vec::new() }
                            }
                            key=|row| (row.listing.listing_id, row.status)
                            let:row
                        >
                            <ListingRow row=row />
                        </For>
                    </tbody>
                </table>
            </div>

            <div class="table-caption">{move || page.with(|p| p.caption())}</div>

            <Show when=move || page.with(|p| p.page_count > 1)>
                <PaginationControls
                    current_page=Signal::derive(move || page.with(|p| p.page))
                    total_pages=Signal::derive(move || page.with(|p| p.page_count))
                    on_page_change=Callback::new(move |p: usize| state.page.set(p))
                />
            </Show>

            <UploadDialog modal=modal on_success=on_uploaded />
        </div>
    }
}
