use crate::shared::icons::icon;
use leptos::prelude::*;

/// Numbered pagination: previous, one button per page, next.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Called with the requested page (1-based)
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let go_prev = move |_| {
        let page = current_page.get();
        if page > 1 {
            on_page_change.run(page - 1);
        }
    };

    let go_next = move |_| {
        let page = current_page.get();
        if page < total_pages.get() {
            on_page_change.run(page + 1);
        }
    };

    view! {
        <nav class="pagination-controls" aria-label="Pagination">
            <button
                class="pagination-btn"
                on:click=go_prev
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
                " Previous"
            </button>
            {move || {
                (1..=total_pages.get())
                    .map(|page| {
                        view! {
                            <button
                                class="pagination-btn pagination-btn--page"
                                class:pagination-btn--active=move || current_page.get() == page
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=go_next
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                "Next "
                {icon("chevron-right")}
            </button>
        </nav>
    }
}
