pub mod a001_listing;
