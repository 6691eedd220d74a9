//! ListingLens - Airbnb Listings Explorer & Price Range Simulator
//!
//! Loads a CSV of listings once, filters it by listing type and neighborhood,
//! renders analysis charts and suggests a price band for a given
//! neighborhood / listing type / minimum nights query.

mod charts;
mod config;
mod data;
mod gui;
mod query;
mod stats;

use anyhow::Context;
use eframe::egui;
use gui::ListingLensApp;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config::AppConfig::load(Path::new(config::CONFIG_FILE))
        .context("failed to read configuration")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1100.0, 650.0])
            .with_title("ListingLens"),
        ..Default::default()
    };

    eframe::run_native(
        "ListingLens",
        options,
        Box::new(move |cc| Ok(Box::new(ListingLensApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))
}
