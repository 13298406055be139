use leptos::prelude::*;

/// UI state shared by the whole app.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Sidebar expanded (labels visible) or collapsed to icons
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
