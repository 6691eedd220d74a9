//! Query module - pure filtering and aggregation over the listings table

mod engine;

pub use engine::{QueryEngine, QueryError};
