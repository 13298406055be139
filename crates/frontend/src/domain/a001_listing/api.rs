//! Calls to the backend `/api/listings/` routes.

use contracts::domain::a001_listing::{Listing, NewListing, LISTINGS_PATH, UPLOAD_CSV_PATH};
use contracts::shared::api_error::user_message;
use gloo_net::http::{Request, Response};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData};

use crate::shared::api_utils::api_url;

pub const FETCH_FAILED: &str = "Failed to fetch listings";
pub const ADD_ITEM_FAILED: &str = "Failed to add item. Please try again.";
pub const CSV_UPLOAD_FAILED: &str = "CSV upload failed";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again.";

/// Message for a non-2xx response, read from its JSON body when possible.
async fn failure_message(response: Response, fallback: &str) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("HTTP {} from {}: {}", status, response.url(), body);
    user_message(&body, fallback)
}

pub async fn fetch_listings() -> Result<Vec<Listing>, String> {
    let response = Request::get(&api_url(LISTINGS_PATH))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| {
            log::error!("Fetching listings failed: {}", e);
            FETCH_FAILED.to_string()
        })?;

    if !response.ok() {
        return Err(failure_message(response, FETCH_FAILED).await);
    }

    response.json::<Vec<Listing>>().await.map_err(|e| {
        log::error!("Unreadable listings payload: {}", e);
        FETCH_FAILED.to_string()
    })
}

fn listing_form_data(listing: &NewListing, image: Option<&File>) -> Result<FormData, String> {
    let to_string = |e: wasm_bindgen::JsValue| format!("{e:?}");

    let form_data = FormData::new().map_err(to_string)?;
    for (name, value) in listing.form_fields() {
        form_data.append_with_str(name, &value).map_err(to_string)?;
    }
    if let Some(file) = image {
        form_data
            .append_with_blob_and_filename("image", file, &file.name())
            .map_err(to_string)?;
    }
    Ok(form_data)
}

/// POST one listing as multipart form data, with an optional image.
pub async fn create_listing(listing: &NewListing, image: Option<&File>) -> Result<(), String> {
    let form_data = listing_form_data(listing, image).map_err(|e| {
        log::error!("Building listing form data failed: {}", e);
        UNEXPECTED_ERROR.to_string()
    })?;

    let response = Request::post(&api_url(LISTINGS_PATH))
        .body(form_data)
        .map_err(|e| {
            log::error!("Building listing request failed: {}", e);
            UNEXPECTED_ERROR.to_string()
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("Creating listing failed: {}", e);
            UNEXPECTED_ERROR.to_string()
        })?;

    if !response.ok() {
        return Err(failure_message(response, ADD_ITEM_FAILED).await);
    }
    Ok(())
}

/// POST a CSV file as multipart field `file`.
pub async fn upload_csv(file: &File) -> Result<(), String> {
    let form_data = FormData::new()
        .and_then(|fd| fd.append_with_blob_and_filename("file", file, &file.name()).map(|_| fd))
        .map_err(|e| {
            log::error!("Building CSV form data failed: {:?}", e);
            UNEXPECTED_ERROR.to_string()
        })?;

    let response = Request::post(&api_url(UPLOAD_CSV_PATH))
        .body(form_data)
        .map_err(|e| {
            log::error!("Building CSV request failed: {}", e);
            UNEXPECTED_ERROR.to_string()
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("CSV upload failed: {}", e);
            UNEXPECTED_ERROR.to_string()
        })?;

    if !response.ok() {
        return Err(failure_message(response, CSV_UPLOAD_FAILED).await);
    }
    Ok(())
}

/// Whole file as text, for the CSV preview.
pub async fn read_file_text(file: &File) -> Result<String, String> {
    JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Could not read {}: {:?}", file.name(), e))?
        .as_string()
        .ok_or_else(|| format!("Could not read {} as text", file.name()))
}
