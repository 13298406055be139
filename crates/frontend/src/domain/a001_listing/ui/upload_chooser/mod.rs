use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use super::csv_upload::CsvUpload;
use super::details::AddItemForm;
use crate::shared::icons::icon;
use crate::shared::modal::{Modal, ModalController};

/// Which screen of the upload dialog is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStage {
    Chooser,
    Manual,
    Csv,
}

impl UploadStage {
    pub fn title(&self) -> &'static str {
        match self {
            UploadStage::Chooser => "Choose upload method",
            UploadStage::Manual => "Add item",
            UploadStage::Csv => "Upload CSV",
        }
    }
}

/// Upload dialog: pick manual entry or CSV, then show that form.
#[component]
pub fn UploadDialog(modal: ModalController<UploadStage>, on_success: Callback<()>) -> impl IntoView {
    let close = Callback::new(move |_| modal.close());
    let title = Signal::derive(move || {
        modal
            .content
            .get()
            .unwrap_or(UploadStage::Chooser)
            .title()
            .to_string()
    });

    view! {
        <Show when=move || modal.is_open.get()>
            <Modal title=title on_close=close>
                {move || match modal.content.get().unwrap_or(UploadStage::Chooser) {
                    UploadStage::Chooser => view! {
                        <div class="upload-chooser">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| modal.set_content(UploadStage::Manual)
                            >
                                {icon("edit")}
                                " Manually"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| modal.set_content(UploadStage::Csv)
                            >
                                {icon("file")}
                                " CSV file"
                            </Button>
                            <Button on_click=move |_| close.run(())>"Cancel"</Button>
                        </div>
                    }
                    .into_any(),
                    UploadStage::Manual => {
                        view! { <AddItemForm on_success=on_success on_cancel=close /> }.into_any()
                    }
                    UploadStage::Csv => {
                        view! { <CsvUpload on_success=on_success on_cancel=close /> }.into_any()
                    }
                }}
            </Modal>
        </Show>
    }
}
