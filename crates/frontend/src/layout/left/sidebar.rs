//! Sidebar with the dashboard sections and a collapse toggle.

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::{DASHBOARD_PATH, INVENTORY_PATH, ORDERS_PATH, WASTE_CLAIMS_PATH};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

pub const LOGOUT_PATH: &str = "/logout";

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    label: &'static str,
    href: &'static str,
    icon: &'static str,
}

const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem {
        label: "Dashboard",
        href: DASHBOARD_PATH,
        icon: "grid",
    },
    MenuItem {
        label: "Inventory",
        href: INVENTORY_PATH,
        icon: "box",
    },
    MenuItem {
        label: "Waste Claims",
        href: WASTE_CLAIMS_PATH,
        icon: "trash",
    },
    MenuItem {
        label: "Orders",
        href: ORDERS_PATH,
        icon: "cart",
    },
];

/// Exact match, ignoring a trailing slash. The root path renders the same
/// page as the dashboard entry and highlights it.
fn is_active(href: &str, pathname: &str) -> bool {
    let trim = |p: &str| match p.trim_end_matches('/') {
        "" => DASHBOARD_PATH.to_string(),
        t => t.to_string(),
    };
    trim(href) == trim(pathname)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <button
                    class="app-sidebar__toggle"
                    title="Toggle sidebar"
                    on:click=move |_| ctx.toggle_left()
                >
                    {icon("menu")}
                </button>
                <span class="app-sidebar__logo">"FeedLink"</span>
            </div>

            <nav class="app-sidebar__nav">
                {MENU_ITEMS
                    .into_iter()
                    .map(|item| {
                        view! {
                            <a
                                href=item.href
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    pathname.with(|p| is_active(item.href, p))
                                }
                                title=item.label
                            >
                                <span class="app-sidebar__icon">{icon(item.icon)}</span>
                                <span class="app-sidebar__label">{item.label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="app-sidebar__spacer" />

            <a href=LOGOUT_PATH class="app-sidebar__item app-sidebar__logout" title="Log Out">
                <span class="app-sidebar__icon">{icon("log-out")}</span>
                <span class="app-sidebar__label">"Log Out"</span>
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_item_is_exact_match() {
        assert!(is_active("/dashboard/inventory", "/dashboard/inventory"));
        assert!(is_active("/dashboard/inventory", "/dashboard/inventory/"));
        assert!(!is_active("/dashboard", "/dashboard/inventory"));
        assert!(!is_active("/dashboard/orders", "/dashboard"));
    }

    #[test]
    fn test_root_highlights_dashboard() {
        assert!(is_active(DASHBOARD_PATH, "/"));
        assert!(is_active(DASHBOARD_PATH, ""));
        assert!(!is_active(INVENTORY_PATH, "/"));
    }

    #[test]
    fn test_menu_order() {
        let labels: Vec<&str> = MENU_ITEMS.iter().map(|m| m.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Inventory", "Waste Claims", "Orders"]);
    }
}
