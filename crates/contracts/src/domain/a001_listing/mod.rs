//! Listing: a product record tracked by the inventory dashboard.

pub mod aggregate;
pub mod csv;
pub mod form;
pub mod query;
pub mod status;

pub use aggregate::{Listing, ListingId, ProductType, Unit, UploadMethod};
pub use form::{ListingForm, ListingFormError, NewListing};
pub use status::ListingStatus;

/// Collection endpoint: `GET` lists, `POST` creates (JSON or multipart).
pub const LISTINGS_PATH: &str = "/api/listings/";

/// Bulk creation from a CSV file sent as multipart field `file`.
pub const UPLOAD_CSV_PATH: &str = "/api/listings/upload-csv/";
