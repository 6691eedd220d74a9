//! GUI module - User interface components

mod analysis_tab;
mod app;
mod filter_panel;
mod simulator_tab;

pub use analysis_tab::AnalysisTab;
pub use app::ListingLensApp;
pub use filter_panel::{FilterPanel, FilterSelection};
pub use simulator_tab::SimulatorTab;
