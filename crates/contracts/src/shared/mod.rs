//! Helpers shared by every domain module

pub mod api_error;
pub mod number;
pub mod timestamp;
