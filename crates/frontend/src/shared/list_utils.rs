/// Search box for list pages
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Delay between the last keystroke and `on_change`
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Search input with debounce and a clear button.
///
/// Typing updates the box immediately; `on_change` fires once input pauses.
/// Clearing fires immediately.
#[component]
pub fn SearchInput(
    /// Callback with the settled search text
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search items...".to_string()
    } else {
        placeholder
    };

    let input_value = RwSignal::new(String::new());
    // Dropping a pending Timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |new_value: String| {
        input_value.set(new_value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.with(String::is_empty)>
                <button class="search-input__clear" on:click=clear title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
