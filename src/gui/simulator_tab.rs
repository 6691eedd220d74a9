//! Price Simulator Tab
//! Exact neighborhood/type/nights query with the recommended price band.

use crate::stats::PriceSummary;
use egui::{Color32, ComboBox, RichText};

/// Outcome of the last simulator query.
enum SimResult {
    NotRun,
    /// No listing matches the selection.
    NoData,
    Summary(PriceSummary),
    Error(String),
}

/// Central panel content for the Simulator tab. Owns the query parameters;
/// the app runs the query and hands the result back.
pub struct SimulatorTab {
    pub neighborhood: String,
    pub listing_type: String,
    pub min_nights: i64,
    result: SimResult,
}

impl SimulatorTab {
    pub fn new(default_min_nights: i64) -> Self {
        Self {
            neighborhood: String::new(),
            listing_type: String::new(),
            min_nights: default_min_nights.clamp(1, 30),
            result: SimResult::NotRun,
        }
    }

    pub fn set_result(&mut self, summary: Option<PriceSummary>) {
        self.result = match summary {
            Some(summary) => SimResult::Summary(summary),
            None => SimResult::NoData,
        };
    }

    pub fn set_error(&mut self, message: String) {
        self.result = SimResult::Error(message);
    }

    /// Draw the tab. Returns true when a query parameter changed.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        neighborhoods: &[String],
        listing_types: &[String],
    ) -> bool {
        let mut changed = false;

        ui.label(RichText::new("Price Simulator").size(18.0).strong());
        ui.add_space(10.0);

        let label_width = 110.0;
        let combo_width = 200.0;

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Neighborhood:"));
            ComboBox::from_id_salt("sim_neighborhood")
                .width(combo_width)
                .selected_text(&self.neighborhood)
                .show_ui(ui, |ui| {
                    for hood in neighborhoods {
                        if ui
                            .selectable_label(self.neighborhood == *hood, hood)
                            .clicked()
                        {
                            self.neighborhood = hood.clone();
                            changed = true;
                        }
                    }
                });
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Listing type:"));
            ComboBox::from_id_salt("sim_listing_type")
                .width(combo_width)
                .selected_text(&self.listing_type)
                .show_ui(ui, |ui| {
                    for lt in listing_types {
                        if ui
                            .selectable_label(self.listing_type == *lt, lt)
                            .clicked()
                        {
                            self.listing_type = lt.clone();
                            changed = true;
                        }
                    }
                });
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Nights:"));
            if ui
                .add(egui::Slider::new(&mut self.min_nights, 1..=30))
                .changed()
            {
                changed = true;
            }
        });

        ui.add_space(20.0);
        ui.separator();
        ui.add_space(10.0);

        match &self.result {
            SimResult::NotRun => {
                ui.label(RichText::new("Pick a neighborhood and listing type").size(13.0));
            }
            SimResult::NoData => {
                ui.label(
                    RichText::new("No matching listings for this selection")
                        .size(14.0)
                        .color(Color32::from_rgb(243, 156, 18)),
                );
            }
            SimResult::Error(message) => {
                ui.label(
                    RichText::new(format!("Error: {message}"))
                        .size(13.0)
                        .color(Color32::from_rgb(220, 53, 69)),
                );
            }
            SimResult::Summary(summary) => {
                ui.label(RichText::new("Recommended price range:").size(13.0));
                ui.label(
                    RichText::new(format!(
                        "${:.2} – ${:.2}",
                        summary.range.low, summary.range.high
                    ))
                    .size(24.0)
                    .strong()
                    .color(Color32::from_rgb(40, 167, 69)),
                );

                ui.add_space(10.0);

                egui::Grid::new("sim_summary")
                    .striped(true)
                    .min_col_width(80.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new("Listings").strong().size(11.0));
                        ui.label(RichText::new("Mean").strong().size(11.0));
                        ui.label(RichText::new("Median").strong().size(11.0));
                        ui.end_row();

                        ui.label(RichText::new(summary.count.to_string()).size(11.0));
                        ui.label(RichText::new(format!("${:.2}", summary.mean)).size(11.0));
                        ui.label(RichText::new(format!("${:.2}", summary.median)).size(11.0));
                        ui.end_row();
                    });
            }
        }

        changed
    }
}
