//! ListingLens Main Application
//! Window with the filter sidebar and the Analysis / Simulator tabs.
//!
//! Interactions are explicit request/response: a widget change marks the
//! affected tab dirty and the next frame recomputes it through the query
//! engine. Nothing re-runs implicitly and the loaded table never changes.

use crate::charts::{AnalysisData, CategorySeries, ReviewsRow, ScatterSeries};
use crate::config::AppConfig;
use crate::data::{
    DataLoader, COL_LISTING_TYPE, COL_MIN_NIGHTS, COL_NEIGHBORHOOD, COL_PRICE,
    COL_REVIEWS_PER_MONTH,
};
use crate::gui::{AnalysisTab, FilterPanel, SimulatorTab};
use crate::query::{QueryEngine, QueryError};
use egui::SidePanel;
use polars::prelude::DataFrame;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Analysis,
    Simulator,
}

/// Main application window.
pub struct ListingLensApp {
    loader: DataLoader,
    filter_panel: FilterPanel,
    analysis: AnalysisTab,
    simulator: SimulatorTab,
    active_tab: Tab,
    load_error: Option<String>,
    analysis_dirty: bool,
    simulator_dirty: bool,
}

impl ListingLensApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut loader = DataLoader::new();
        let mut filter_panel = FilterPanel::new();
        let mut simulator = SimulatorTab::new(config.default_min_nights);
        let mut load_error = None;

        match loader.get_or_load(&config.data_path) {
            Ok(_) => {
                let listing_types = loader.unique_values(COL_LISTING_TYPE);
                let neighborhoods = loader.unique_values(COL_NEIGHBORHOOD);
                simulator.listing_type = listing_types.first().cloned().unwrap_or_default();
                simulator.neighborhood = neighborhoods.first().cloned().unwrap_or_default();
                filter_panel.set_options(listing_types, neighborhoods);

                let file_name = loader
                    .file_path()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                filter_panel.set_status(format!("{file_name}: {} listings", loader.row_count()));
            }
            Err(e) => {
                log::error!("could not load {}: {e}", config.data_path.display());
                let message = format!("Error: failed to load {}: {e}", config.data_path.display());
                filter_panel.set_status(message.clone());
                load_error = Some(message);
            }
        }

        Self {
            loader,
            filter_panel,
            analysis: AnalysisTab::new(),
            simulator,
            active_tab: Tab::Analysis,
            load_error,
            analysis_dirty: true,
            simulator_dirty: true,
        }
    }

    /// Recompute the analysis charts for the current filter selection.
    fn refresh_analysis(&mut self) {
        let Some(df) = self.loader.dataframe() else {
            return;
        };

        match Self::build_analysis(df, &self.filter_panel) {
            Ok((data, matched)) => {
                self.filter_panel
                    .set_status(format!("{matched} of {} listings", df.height()));
                self.analysis.set_data(data);
            }
            Err(e) => {
                log::error!("analysis query failed: {e}");
                self.filter_panel.set_status(format!("Error: {e}"));
                self.analysis.clear();
            }
        }
        self.analysis_dirty = false;
    }

    fn build_analysis(
        df: &DataFrame,
        panel: &FilterPanel,
    ) -> Result<(AnalysisData, usize), QueryError> {
        let filtered = QueryEngine::filter_by_categories(
            df,
            &panel.selection.listing_types,
            &panel.selection.neighborhoods,
        )?;

        // Keep the sidebar order so chart colors stay stable per type
        let selected_types: Vec<String> = panel
            .listing_type_options
            .iter()
            .filter(|t| panel.selection.listing_types.contains(*t))
            .cloned()
            .collect();

        let mut nights_by_type = Vec::new();
        let mut price_by_type = Vec::new();
        let mut scatter = Vec::new();
        for listing_type in &selected_types {
            nights_by_type.push(CategorySeries {
                label: listing_type.clone(),
                values: QueryEngine::values_for_type(&filtered, listing_type, COL_MIN_NIGHTS)?,
            });
            price_by_type.push(CategorySeries {
                label: listing_type.clone(),
                values: QueryEngine::values_for_type(&filtered, listing_type, COL_PRICE)?,
            });
            scatter.push(ScatterSeries {
                label: listing_type.clone(),
                points: QueryEngine::scatter_for_type(&filtered, listing_type)?,
            });
        }

        let agg = QueryEngine::aggregate_reviews(&filtered)?;
        let hoods = agg.column(COL_NEIGHBORHOOD)?.str()?;
        let types = agg.column(COL_LISTING_TYPE)?.str()?;
        let totals = agg.column(COL_REVIEWS_PER_MONTH)?.f64()?;

        let mut reviews = Vec::new();
        for i in 0..agg.height() {
            if let (Some(hood), Some(lt), Some(total)) =
                (hoods.get(i), types.get(i), totals.get(i))
            {
                reviews.push(ReviewsRow {
                    neighborhood: hood.to_string(),
                    listing_type: lt.to_string(),
                    total,
                });
            }
        }

        let matched = filtered.height();
        Ok((
            AnalysisData {
                nights_by_type,
                price_by_type,
                reviews,
                scatter,
            },
            matched,
        ))
    }

    /// Re-run the simulator query. Like the source dashboard, it searches the
    /// whole table, not the filtered view.
    fn refresh_simulator(&mut self) {
        let Some(df) = self.loader.dataframe() else {
            return;
        };

        match QueryEngine::price_summary(
            df,
            &self.simulator.neighborhood,
            &self.simulator.listing_type,
            self.simulator.min_nights,
        ) {
            Ok(summary) => self.simulator.set_result(summary),
            Err(e) => {
                log::error!("simulator query failed: {e}");
                self.simulator.set_error(e.to_string());
            }
        }
        self.simulator_dirty = false;
    }
}

impl eframe::App for ListingLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        SidePanel::left("filter_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if self.filter_panel.show(ui) {
                        self.analysis_dirty = true;
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(message) = &self.load_error {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new(message)
                            .size(16.0)
                            .color(egui::Color32::from_rgb(220, 53, 69)),
                    );
                });
                return;
            }

            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.active_tab, Tab::Analysis, "📊 Analysis");
                ui.selectable_value(&mut self.active_tab, Tab::Simulator, "💲 Simulator");
            });
            ui.separator();

            match self.active_tab {
                Tab::Analysis => {
                    if self.analysis_dirty {
                        self.refresh_analysis();
                    }
                    self.analysis.show(ui);
                }
                Tab::Simulator => {
                    let neighborhoods = self.filter_panel.neighborhood_options.clone();
                    let listing_types = self.filter_panel.listing_type_options.clone();
                    if self.simulator.show(ui, &neighborhoods, &listing_types) {
                        self.simulator_dirty = true;
                    }
                    if self.simulator_dirty {
                        self.refresh_simulator();
                    }
                }
            }
        });
    }
}
