//! Stats module - price percentiles and summaries

mod calculator;

pub use calculator::{percentile, PriceRange, PriceSummary};
