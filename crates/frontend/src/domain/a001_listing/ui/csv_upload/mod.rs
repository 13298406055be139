use contracts::domain::a001_listing::csv::{CsvPreview, REQUIRED_COLUMNS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};
use web_sys::{File, HtmlInputElement};

use crate::domain::a001_listing::api;
use crate::shared::icons::icon;

pub const NO_FILE_SELECTED: &str = "Please select a CSV file to upload.";

/// Numbers file picks so a slow read of an older file cannot replace the
/// preview of the file picked after it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct PickCounter {
    latest: u64,
}

impl PickCounter {
    fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

#[component]
fn PreviewPanel(preview: CsvPreview) -> impl IntoView {
    let clean = preview.is_clean();
    let missing = (!preview.missing_columns.is_empty())
        .then(|| format!("Missing columns: {}", preview.missing_columns.join(", ")));

    view! {
        <div class="csv-preview" class:csv-preview--clean=clean>
            <div class="csv-preview__summary">
                {icon("file")}
                {format!(" {} rows, columns: {}", preview.row_count, preview.headers.join(", "))}
            </div>
            {missing.map(|m| view! { <div class="csv-preview__problem">{m}</div> })}
            <ul class="csv-preview__errors">
                {preview
                    .row_errors
                    .into_iter()
                    .map(|e| view! { <li>{e}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Bulk upload of listings from a CSV file.
///
/// The preview only warns; the file is sent as-is and the backend decides.
#[component]
pub fn CsvUpload(on_success: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let file = RwSignal::new_local(None::<File>);
    let preview = RwSignal::new(None::<CsvPreview>);
    let error = RwSignal::new(None::<String>);
    let is_uploading = RwSignal::new(false);
    let picks = StoredValue::new(PickCounter::default());

    let on_file = move |ev: leptos::ev::Event| {
        let selected = event_target::<HtmlInputElement>(&ev)
            .files()
            .and_then(|list| list.get(0));
        error.set(None);
        preview.set(None);
        let ticket = picks.try_update_value(PickCounter::next).unwrap_or_default();

        if let Some(f) = selected.clone() {
            spawn_local(async move {
                let result = api::read_file_text(&f).await;
                if !picks.with_value(|p| p.is_current(ticket)) {
                    log::debug!("Dropping stale preview of {}", f.name());
                    return;
                }
                match result {
                    Ok(text) => preview.set(Some(CsvPreview::from_text(&text))),
                    Err(e) => log::warn!("{}", e),
                }
            });
        }
        file.set(selected);
    };

    let submit = move |_| {
        if is_uploading.get_untracked() {
            return;
        }
        let Some(selected) = file.get_untracked() else {
            error.set(Some(NO_FILE_SELECTED.to_string()));
            return;
        };

        error.set(None);
        is_uploading.set(true);
        spawn_local(async move {
            match api::upload_csv(&selected).await {
                Ok(()) => {
                    log::info!("CSV uploaded: {}", selected.name());
                    on_success.run(());
                }
                Err(e) => error.set(Some(e)),
            }
            is_uploading.set(false);
        });
    };

    view! {
        <div class="detail-form csv-upload">
            {move || error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}

            <p class="help-text">
                {format!("Required columns: {}", REQUIRED_COLUMNS.join(", "))}
            </p>
            <div class="form__group">
                <label class="form__label" for="csv_file">"CSV file"</label>
                <input
                    class="form__input"
                    type="file"
                    id="csv_file"
                    accept=".csv,text/csv"
                    on:change=on_file
                />
            </div>

            {move || preview.get().map(|p| view! { <PreviewPanel preview=p /> })}

            <div class="form__actions">
                <Button
                    on_click=move |_| on_cancel.run(())
                    disabled=Signal::derive(move || is_uploading.get())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || is_uploading.get())
                >
                    {move || if is_uploading.get() { "Uploading..." } else { "Upload" }}
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_pick_is_current() {
        let mut picks = PickCounter::default();
        let first = picks.next();
        let second = picks.next();

        assert!(!picks.is_current(first));
        assert!(picks.is_current(second));
    }
}
