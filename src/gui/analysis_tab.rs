//! Analysis Tab
//! Scrollable chart area over the currently filtered listings.

use crate::charts::{AnalysisData, ChartPlotter};
use egui::{RichText, ScrollArea};

const CHART_HEIGHT: f32 = 280.0;

/// Central panel content for the Analysis tab. Holds the precomputed chart
/// data for the current filter selection.
#[derive(Default)]
pub struct AnalysisTab {
    data: Option<AnalysisData>,
}

impl AnalysisTab {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, data: AnalysisData) {
        self.data = Some(data);
    }

    pub fn clear(&mut self) {
        self.data = None;
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(data) = &self.data else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        if data.price_by_type.iter().all(|s| s.values.is_empty()) {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No listings match the current filters").size(16.0));
            });
            return;
        }

        let type_order: Vec<String> = data
            .price_by_type
            .iter()
            .map(|s| s.label.clone())
            .collect();

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            let half_width = (ui.available_width() - 20.0) / 2.0;

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.set_width(half_width);
                    ui.label(
                        RichText::new("Minimum Nights by Listing Type")
                            .size(14.0)
                            .strong(),
                    );
                    ChartPlotter::draw_min_nights_boxplot(ui, &data.nights_by_type, CHART_HEIGHT);
                });

                ui.add_space(10.0);

                ui.vertical(|ui| {
                    ui.set_width(half_width);
                    ui.label(
                        RichText::new("Price Distribution by Listing Type")
                            .size(14.0)
                            .strong(),
                    );
                    ChartPlotter::draw_price_histogram(ui, &data.price_by_type, CHART_HEIGHT);
                });
            });

            ui.add_space(15.0);

            ui.label(
                RichText::new("Reviews per Month by Neighborhood and Type")
                    .size(14.0)
                    .strong(),
            );
            ChartPlotter::draw_reviews_chart(ui, &data.reviews, &type_order, CHART_HEIGHT);

            ui.add_space(15.0);

            ui.label(RichText::new("Reviews vs Price").size(14.0).strong());
            ChartPlotter::draw_reviews_price_scatter(ui, &data.scatter, CHART_HEIGHT);

            ui.add_space(10.0);
        });
    }
}
