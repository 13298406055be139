use crate::routes::routes::INVENTORY_PATH;
use crate::shared::components::page_header::PageHeader;
use leptos::prelude::*;

/// Section that exists in the navigation but has no content yet.
#[component]
fn ComingSoon(title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title=title />
            <div class="placeholder">
                <p>{text}</p>
                <a href=INVENTORY_PATH class="placeholder__link">"Go to Inventory"</a>
            </div>
        </div>
    }
}

#[component]
pub fn WasteClaimsPage() -> impl IntoView {
    view! { <ComingSoon title="Waste Claims" text="Waste claims will appear here." /> }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    view! { <ComingSoon title="Orders" text="Orders will appear here." /> }
}

#[component]
pub fn LoggedOutPage() -> impl IntoView {
    view! { <ComingSoon title="Logged out" text="You have been logged out." /> }
}
