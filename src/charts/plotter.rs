//! Chart Plotter Module
//! Creates interactive visualizations using egui_plot.

use egui::Color32;
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Plot, PlotPoints, Points};

/// Color palette for listing types
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(255, 87, 34),   // Deep Orange
    Color32::from_rgb(121, 85, 72),   // Brown
];

/// Number of bins in the price histogram
const HISTOGRAM_BINS: usize = 50;

/// Maximum bars shown in the reviews chart
const MAX_REVIEW_BARS: usize = 20;

/// Values of one numeric column for a single listing type.
#[derive(Debug, Clone)]
pub struct CategorySeries {
    pub label: String,
    pub values: Vec<f64>,
}

/// One (neighborhood, listing type) group with its summed reviews per month.
#[derive(Debug, Clone)]
pub struct ReviewsRow {
    pub neighborhood: String,
    pub listing_type: String,
    pub total: f64,
}

/// Scatter points `[reviews_ltm, price]` for a single listing type.
#[derive(Debug, Clone)]
pub struct ScatterSeries {
    pub label: String,
    pub points: Vec<[f64; 2]>,
}

/// Everything the analysis tab draws, precomputed from the filtered table.
#[derive(Debug, Clone, Default)]
pub struct AnalysisData {
    pub nights_by_type: Vec<CategorySeries>,
    pub price_by_type: Vec<CategorySeries>,
    pub reviews: Vec<ReviewsRow>,
    pub scatter: Vec<ScatterSeries>,
}

/// Creates the dashboard charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Color for the listing type at `index` in the sidebar order.
    pub fn type_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Box plot of minimum nights per listing type.
    pub fn draw_min_nights_boxplot(ui: &mut egui::Ui, series: &[CategorySeries], height: f32) {
        let x_labels: Vec<String> = series.iter().map(|s| s.label.clone()).collect();

        Plot::new("min_nights_boxplot")
            .height(height)
            .allow_scroll(false)
            .x_axis_label("Listing type")
            .y_axis_label("Minimum nights")
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < x_labels.len() {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (i, s) in series.iter().enumerate() {
                    if s.values.is_empty() {
                        continue;
                    }
                    let color = Self::type_color(i);

                    let mut sorted = s.values.clone();
                    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

                    let n = sorted.len();
                    let q1 = sorted[n / 4];
                    let median = sorted[n / 2];
                    let q3 = sorted[3 * n / 4];
                    let iqr = q3 - q1;
                    let whisker_low = sorted
                        .iter()
                        .copied()
                        .find(|&v| v >= q1 - 1.5 * iqr)
                        .unwrap_or(q1);
                    let whisker_high = sorted
                        .iter()
                        .rev()
                        .copied()
                        .find(|&v| v <= q3 + 1.5 * iqr)
                        .unwrap_or(q3);

                    let box_elem = BoxElem::new(
                        i as f64,
                        BoxSpread::new(whisker_low, q1, median, q3, whisker_high),
                    )
                    .box_width(0.5)
                    .fill(color.gamma_multiply(0.3))
                    .stroke(egui::Stroke::new(1.5, color));

                    plot_ui.box_plot(BoxPlot::new(vec![box_elem]).name(&s.label));
                }
            });
    }

    /// Overlaid price histogram, one translucent bar chart per listing type.
    pub fn draw_price_histogram(ui: &mut egui::Ui, series: &[CategorySeries], height: f32) {
        let all_prices = series.iter().flat_map(|s| s.values.iter().copied());
        let min = all_prices.clone().fold(f64::INFINITY, f64::min);
        let max = all_prices.fold(f64::NEG_INFINITY, f64::max);
        if !min.is_finite() || !max.is_finite() {
            ui.label("No price data");
            return;
        }
        let span = (max - min).max(1.0);
        let bin_width = span / HISTOGRAM_BINS as f64;

        Plot::new("price_histogram")
            .height(height)
            .allow_scroll(false)
            .legend(Legend::default())
            .x_axis_label("Price")
            .y_axis_label("Listings")
            .show(ui, |plot_ui| {
                for (i, s) in series.iter().enumerate() {
                    if s.values.is_empty() {
                        continue;
                    }
                    let color = Self::type_color(i);

                    let mut counts = vec![0usize; HISTOGRAM_BINS];
                    for &price in &s.values {
                        let bin = (((price - min) / bin_width) as usize).min(HISTOGRAM_BINS - 1);
                        counts[bin] += 1;
                    }

                    let bars: Vec<Bar> = counts
                        .iter()
                        .enumerate()
                        .filter(|(_, &count)| count > 0)
                        .map(|(bin, &count)| {
                            Bar::new(min + (bin as f64 + 0.5) * bin_width, count as f64)
                                .width(bin_width)
                        })
                        .collect();

                    plot_ui.bar_chart(
                        BarChart::new(bars)
                            .color(color.gamma_multiply(0.55))
                            .name(&s.label),
                    );
                }
            });
    }

    /// Reviews per month summed by (neighborhood, listing type), largest
    /// groups first. `type_order` fixes the color mapping per listing type.
    pub fn draw_reviews_chart(
        ui: &mut egui::Ui,
        rows: &[ReviewsRow],
        type_order: &[String],
        height: f32,
    ) {
        let mut ordered: Vec<&ReviewsRow> = rows.iter().collect();
        ordered.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
        ordered.truncate(MAX_REVIEW_BARS);

        let x_labels: Vec<String> = ordered.iter().map(|r| r.neighborhood.clone()).collect();

        Plot::new("reviews_chart")
            .height(height)
            .allow_scroll(false)
            .legend(Legend::default())
            .x_axis_label("Neighborhood")
            .y_axis_label("Reviews per month")
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < x_labels.len() {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (type_idx, listing_type) in type_order.iter().enumerate() {
                    let bars: Vec<Bar> = ordered
                        .iter()
                        .enumerate()
                        .filter(|(_, r)| &r.listing_type == listing_type)
                        .map(|(x, r)| {
                            Bar::new(x as f64, r.total)
                                .width(0.7)
                                .name(format!("{} · {}", r.neighborhood, r.listing_type))
                        })
                        .collect();
                    if bars.is_empty() {
                        continue;
                    }
                    plot_ui.bar_chart(
                        BarChart::new(bars)
                            .color(Self::type_color(type_idx))
                            .name(listing_type),
                    );
                }
            });
    }

    /// Reviews-vs-price scatter. Point radius grows with price (three price
    /// buckets per listing type) to keep the original bubble reading.
    pub fn draw_reviews_price_scatter(ui: &mut egui::Ui, series: &[ScatterSeries], height: f32) {
        Plot::new("reviews_price_scatter")
            .height(height)
            .allow_scroll(false)
            .legend(Legend::default())
            .x_axis_label("Reviews (last 12 months)")
            .y_axis_label("Price")
            .show(ui, |plot_ui| {
                for (i, s) in series.iter().enumerate() {
                    if s.points.is_empty() {
                        continue;
                    }
                    let color = Self::type_color(i);

                    let min_price = s.points.iter().map(|p| p[1]).fold(f64::INFINITY, f64::min);
                    let max_price = s
                        .points
                        .iter()
                        .map(|p| p[1])
                        .fold(f64::NEG_INFINITY, f64::max);
                    let span = (max_price - min_price).max(f64::EPSILON);

                    let mut buckets: [Vec<[f64; 2]>; 3] = [Vec::new(), Vec::new(), Vec::new()];
                    for &point in &s.points {
                        let t = (point[1] - min_price) / span;
                        let bucket = ((t * 3.0) as usize).min(2);
                        buckets[bucket].push(point);
                    }

                    for (bucket, points) in buckets.iter().enumerate() {
                        if points.is_empty() {
                            continue;
                        }
                        let plot_points = PlotPoints::from_iter(points.iter().copied());
                        let mut marker = Points::new(plot_points)
                            .radius(2.0 + 2.0 * bucket as f32)
                            .color(color.gamma_multiply(0.7));
                        if bucket == 0 {
                            marker = marker.name(&s.label);
                        }
                        plot_ui.points(marker);
                    }
                }
            });
    }
}
