//! Data module - listings CSV loading

mod loader;

pub use loader::{load_listings, DataLoader, LoaderError};

/// Stable column names, applied at load time and used everywhere downstream.
pub const COL_LISTING_TYPE: &str = "listing_type";
pub const COL_NEIGHBORHOOD: &str = "neighborhood";
pub const COL_PRICE: &str = "price";
pub const COL_MIN_NIGHTS: &str = "minimum_nights";
pub const COL_REVIEWS_LTM: &str = "number_of_reviews_ltm";
pub const COL_REVIEWS_PER_MONTH: &str = "reviews_per_month";
