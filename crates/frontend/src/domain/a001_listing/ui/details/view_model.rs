use contracts::domain::a001_listing::{ListingForm, NewListing, ProductType, UploadMethod};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::domain::a001_listing::api;

/// Validated listing ready to post, or the message to show instead.
/// An `Err` means no request is made.
pub fn prepare_submission(form: &ListingForm) -> Result<NewListing, String> {
    form.validate().map_err(|e| e.to_string())
}

/// ViewModel of the add-item form.
///
/// The form is kept as raw strings in `ListingForm`; the view writes to it
/// with `form.update()` and `submit_command` turns it into a `NewListing`.
#[derive(Clone, Copy)]
pub struct AddItemViewModel {
    pub form: RwSignal<ListingForm>,
    pub image: RwSignal<Option<File>, LocalStorage>,
    pub error: RwSignal<Option<String>>,
    pub is_submitting: RwSignal<bool>,
}

impl AddItemViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(Self::initial_form()),
            image: RwSignal::new_local(None),
            error: RwSignal::new(None),
            is_submitting: RwSignal::new(false),
        }
    }

    /// Items added from this form are manual uploads unless changed.
    pub fn initial_form() -> ListingForm {
        ListingForm {
            upload_method: UploadMethod::Manual.as_str().to_string(),
            ..ListingForm::default()
        }
    }

    pub fn reset_form(&self) {
        self.form.set(Self::initial_form());
        self.image.set(None);
        self.error.set(None);
        self.is_submitting.set(false);
    }

    /// Price inputs are only shown for edible products.
    pub fn shows_prices(&self) -> bool {
        self.form
            .with(|f| ProductType::from_wire(&f.product_type) == Some(ProductType::Edible))
    }

    /// Validate and post the form. The first validation problem is shown
    /// without contacting the backend.
    pub fn submit_command(&self, on_success: Callback<()>) {
        if self.is_submitting.get_untracked() {
            return;
        }

        let listing = match self.form.with_untracked(prepare_submission) {
            Ok(listing) => listing,
            Err(message) => {
                self.error.set(Some(message));
                return;
            }
        };

        self.error.set(None);
        self.is_submitting.set(true);

        let this = *self;
        let image = self.image.get_untracked();
        spawn_local(async move {
            match api::create_listing(&listing, image.as_ref()).await {
                Ok(()) => {
                    log::info!("Listing added: {}", listing.product_type.as_str());
                    this.reset_form();
                    on_success.run(());
                }
                Err(e) => {
                    this.error.set(Some(e));
                    this.is_submitting.set(false);
                }
            }
        });
    }
}

impl Default for AddItemViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ListingForm {
        ListingForm {
            product_type: "edible".into(),
            quantity: "4".into(),
            unit: "kg".into(),
            pickup_window_duration: "2025-03-15T10:00".into(),
            ..AddItemViewModel::initial_form()
        }
    }

    #[test]
    fn test_empty_quantity_blocks_submission() {
        let form = ListingForm {
            quantity: String::new(),
            ..filled_form()
        };
        assert_eq!(
            prepare_submission(&form),
            Err("Quantity must be greater than zero.".to_string())
        );
    }

    #[test]
    fn test_initial_form_is_manual_upload() {
        let listing = prepare_submission(&filled_form()).unwrap();
        assert_eq!(listing.upload_method, UploadMethod::Manual);
        assert_eq!(listing.quantity, 4.0);
    }
}
