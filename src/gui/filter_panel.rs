//! Filter Panel Widget
//! Left side panel with the listing type and neighborhood multiselects.

use egui::{Color32, RichText, ScrollArea};
use std::collections::BTreeSet;

/// The user's current sidebar selection. Ephemeral: rebuilt from the widgets
/// on every interaction, no identity beyond the current view.
#[derive(Default, Clone)]
pub struct FilterSelection {
    pub listing_types: BTreeSet<String>,
    pub neighborhoods: BTreeSet<String>,
}

/// Left side panel with the category filters and a row-count status line.
pub struct FilterPanel {
    pub listing_type_options: Vec<String>,
    pub neighborhood_options: Vec<String>,
    pub selection: FilterSelection,
    pub status: String,
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self {
            listing_type_options: Vec::new(),
            neighborhood_options: Vec::new(),
            selection: FilterSelection::default(),
            status: "Ready".to_string(),
        }
    }
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the option lists after load. Everything starts selected, the
    /// same default the filters had in the source dashboard.
    pub fn set_options(&mut self, listing_types: Vec<String>, neighborhoods: Vec<String>) {
        self.selection.listing_types = listing_types.iter().cloned().collect();
        self.selection.neighborhoods = neighborhoods.iter().cloned().collect();
        self.listing_type_options = listing_types;
        self.neighborhood_options = neighborhoods;
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Draw the panel. Returns true when the selection changed.
    pub fn show(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🏠 ListingLens")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(RichText::new("🔍 Filters").size(14.0).strong());
        ui.add_space(8.0);

        ui.label("Listing types:");
        changed |= Self::draw_multiselect(
            ui,
            "listing_types",
            &self.listing_type_options,
            &mut self.selection.listing_types,
        );

        ui.add_space(10.0);

        ui.label("Neighborhoods:");
        changed |= Self::draw_multiselect(
            ui,
            "neighborhoods",
            &self.neighborhood_options,
            &mut self.selection.neighborhoods,
        );

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        changed
    }

    /// Checkbox list with Select All / Clear All. Returns true on change.
    fn draw_multiselect(
        ui: &mut egui::Ui,
        id: &str,
        options: &[String],
        selected: &mut BTreeSet<String>,
    ) -> bool {
        let mut changed = false;

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(5.0)
            .show(ui, |ui| {
                ScrollArea::vertical()
                    .id_salt(id)
                    .max_height(160.0)
                    .show(ui, |ui| {
                        for option in options {
                            let mut checked = selected.contains(option);
                            if ui.checkbox(&mut checked, option).changed() {
                                if checked {
                                    selected.insert(option.clone());
                                } else {
                                    selected.remove(option);
                                }
                                changed = true;
                            }
                        }
                    });
            });

        ui.add_space(3.0);
        ui.horizontal(|ui| {
            if ui.small_button("Select All").clicked() {
                *selected = options.iter().cloned().collect();
                changed = true;
            }
            if ui.small_button("Clear All").clicked() {
                selected.clear();
                changed = true;
            }
        });

        changed
    }
}
