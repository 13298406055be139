use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Open/closed state of one modal plus which content it shows.
pub struct ModalController<T: Send + Sync + 'static> {
    pub is_open: RwSignal<bool>,
    pub content: RwSignal<Option<T>>,
}

impl<T: Send + Sync + 'static> Clone for ModalController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ModalController<T> {}

impl<T: Send + Sync + 'static> ModalController<T> {
    /// Open the modal on `content`.
    pub fn open_with(&self, content: T) {
        self.content.set(Some(content));
        self.is_open.set(true);
    }

    pub fn set_content(&self, content: T) {
        self.content.set(Some(content));
    }

    /// Close and forget the content, so the next open starts fresh.
    pub fn close(&self) {
        self.is_open.set(false);
        self.content.set(None);
    }
}

/// A closed, empty modal owned by the calling component
pub fn use_modal<T: Send + Sync + 'static>() -> ModalController<T> {
    ModalController {
        is_open: RwSignal::new(false),
        content: RwSignal::new(None),
    }
}

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Handle Escape key; the listener is removed with the modal
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    // Handle overlay click
    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button
                        class="button button--icon modal__close"
                        title="Close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
