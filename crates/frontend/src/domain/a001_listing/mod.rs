pub mod api;
pub mod inventory;
pub mod ui;
