use crate::domain::a001_listing::ui::list::InventoryList;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::placeholder::{LoggedOutPage, OrdersPage, WasteClaimsPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Paths of the dashboard sections, shared by the router and the sidebar.
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const INVENTORY_PATH: &str = "/dashboard/inventory";
pub const WASTE_CLAIMS_PATH: &str = "/dashboard/waste-claims";
pub const ORDERS_PATH: &str = "/dashboard/orders";

#[component]
fn Pages() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=InventoryList />
            <Route path=path!("/dashboard") view=InventoryList />
            <Route path=path!("/dashboard/inventory") view=InventoryList />
            <Route path=path!("/dashboard/waste-claims") view=WasteClaimsPage />
            <Route path=path!("/dashboard/orders") view=OrdersPage />
            <Route path=path!("/logout") view=LoggedOutPage />
        </Routes>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! { <Pages /> }.into_any()
            />
        </Router>
    }
}
