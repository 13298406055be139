use crate::routes::routes::INVENTORY_PATH;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page placeholder">
            <h1>"Page not found"</h1>
            <a href=INVENTORY_PATH class="placeholder__link">"Back to Inventory"</a>
        </div>
    }
}
