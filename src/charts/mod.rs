//! Charts module - Chart rendering

mod plotter;

pub use plotter::{AnalysisData, CategorySeries, ChartPlotter, ReviewsRow, ScatterSeries};
