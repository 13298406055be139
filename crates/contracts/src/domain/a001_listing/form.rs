use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::{ProductType, Unit, UploadMethod};
use crate::shared::number::parse_decimal;
use crate::shared::timestamp::parse_timestamp;

/// Submission errors. The display text is shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListingFormError {
    #[error("Please select the product type.")]
    MissingProductType,

    #[error("Quantity must be greater than zero.")]
    InvalidQuantity,

    #[error("Please select a unit.")]
    MissingUnit,

    #[error("Please select an upload method.")]
    MissingUploadMethod,

    #[error("Please select a pickup window duration.")]
    MissingPickupWindow,

    #[error("Original price must be a positive number or empty.")]
    InvalidOriginalPrice,

    #[error("Discounted price must be a positive number or empty.")]
    InvalidDiscountedPrice,

    #[error("Please enter a valid expiry date.")]
    InvalidExpiryDate,
}

/// Raw state of the add-item form: one string per input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingForm {
    pub product_type: String,
    pub quantity: String,
    pub unit: String,
    pub upload_method: String,
    pub pickup_window_duration: String,
    pub category: String,
    pub description: String,
    pub original_price: String,
    pub discounted_price: String,
    pub expiry_date: String,
}

/// A listing that passed form validation and can be sent to the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewListing {
    pub product_type: ProductType,
    pub quantity: f64,
    pub unit: Unit,
    pub upload_method: UploadMethod,
    pub pickup_window_duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

fn non_blank(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}

/// Empty is fine; anything else must be a number >= 0.
fn optional_price(raw: &str, err: ListingFormError) -> Result<Option<f64>, ListingFormError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    match parse_decimal(raw) {
        Some(v) if v >= 0.0 => Ok(Some(v)),
        _ => Err(err),
    }
}

impl ListingForm {
    /// Check the form in display order and stop at the first problem.
    ///
    /// Prices are only checked, and only kept, for edible products.
    pub fn validate(&self) -> Result<NewListing, ListingFormError> {
        let product_type = ProductType::from_wire(&self.product_type)
            .ok_or(ListingFormError::MissingProductType)?;

        let quantity = parse_decimal(&self.quantity)
            .filter(|q| *q > 0.0)
            .ok_or(ListingFormError::InvalidQuantity)?;

        let unit = Unit::from_wire(&self.unit).ok_or(ListingFormError::MissingUnit)?;

        let upload_method = UploadMethod::from_wire(&self.upload_method)
            .ok_or(ListingFormError::MissingUploadMethod)?;

        let pickup_window_duration = non_blank(&self.pickup_window_duration)
            .ok_or(ListingFormError::MissingPickupWindow)?;

        let (original_price, discounted_price) = match product_type {
            ProductType::Edible => (
                optional_price(&self.original_price, ListingFormError::InvalidOriginalPrice)?,
                optional_price(&self.discounted_price, ListingFormError::InvalidDiscountedPrice)?,
            ),
            ProductType::Inedible => (None, None),
        };

        let expiry_date = match non_blank(&self.expiry_date) {
            Some(raw) if parse_timestamp(&raw).is_none() => {
                return Err(ListingFormError::InvalidExpiryDate)
            }
            other => other,
        };

        Ok(NewListing {
            product_type,
            quantity,
            unit,
            upload_method,
            pickup_window_duration,
            category: non_blank(&self.category),
            description: non_blank(&self.description),
            original_price,
            discounted_price,
            expiry_date,
        })
    }
}

impl NewListing {
    /// Multipart fields in submission order. Optional values are left out
    /// entirely rather than sent empty.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("product_type", self.product_type.as_str().to_string()),
            ("quantity", self.quantity.to_string()),
            ("unit", self.unit.as_str().to_string()),
            ("upload_method", self.upload_method.as_str().to_string()),
            ("pickup_window_duration", self.pickup_window_duration.clone()),
        ];

        let optional = [
            ("category", self.category.clone()),
            ("description", self.description.clone()),
            ("original_price", self.original_price.map(|v| v.to_string())),
            ("discounted_price", self.discounted_price.map(|v| v.to_string())),
            ("expiry_date", self.expiry_date.clone()),
        ];
        fields.extend(optional.into_iter().filter_map(|(k, v)| v.map(|v| (k, v))));
        fields
    }
}
