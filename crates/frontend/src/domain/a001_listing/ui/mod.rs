pub mod csv_upload;
pub mod details;
pub mod list;
pub mod upload_chooser;
