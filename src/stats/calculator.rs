//! Statistics Calculator Module
//! Percentile computation and the derived price band / summary types.

/// Calculate percentile using linear interpolation (NumPy/pandas compatible).
///
/// `sorted_values` must be sorted ascending; `p` is in `[0, 100]`.
pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted_values[0];
    }

    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    if lower == upper {
        sorted_values[lower]
    } else {
        sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
    }
}

/// Recommended pricing band: the 25th to 75th price percentile of a subset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

impl PriceRange {
    /// Quartile band over the given prices. `None` when there is nothing to
    /// summarize, so an empty subset never produces NaN bounds.
    pub fn from_prices(prices: &[f64]) -> Option<Self> {
        if prices.is_empty() {
            return None;
        }
        let mut sorted = prices.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        Some(Self {
            low: percentile(&sorted, 25.0),
            high: percentile(&sorted, 75.0),
        })
    }
}

/// Descriptive summary of a price subset, shown next to the simulator result.
#[derive(Debug, Clone)]
pub struct PriceSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub range: PriceRange,
}

impl PriceSummary {
    pub fn from_prices(prices: &[f64]) -> Option<Self> {
        let range = PriceRange::from_prices(prices)?;

        let mut sorted = prices.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let median = percentile(&sorted, 50.0);

        Some(Self {
            count: n,
            mean,
            median,
            range,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_interpolates_linearly() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert!((percentile(&values, 50.0) - 2.5).abs() < 1e-12);
        assert!((percentile(&values, 25.0) - 1.75).abs() < 1e-12);
        assert!((percentile(&values, 0.0) - 1.0).abs() < 1e-12);
        assert!((percentile(&values, 100.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn percentile_of_empty_slice_is_nan() {
        assert!(percentile(&[], 25.0).is_nan());
    }

    #[test]
    fn price_range_of_empty_subset_is_none() {
        assert!(PriceRange::from_prices(&[]).is_none());
    }

    #[test]
    fn price_range_low_never_exceeds_high() {
        let range = PriceRange::from_prices(&[200.0, 100.0]).unwrap();
        assert!((range.low - 125.0).abs() < 1e-9);
        assert!((range.high - 175.0).abs() < 1e-9);
        assert!(range.low <= range.high);

        let single = PriceRange::from_prices(&[42.0]).unwrap();
        assert_eq!(single.low, single.high);
    }

    #[test]
    fn summary_counts_and_centers() {
        let summary = PriceSummary::from_prices(&[100.0, 200.0, 300.0]).unwrap();
        assert_eq!(summary.count, 3);
        assert!((summary.mean - 200.0).abs() < 1e-12);
        assert!((summary.median - 200.0).abs() < 1e-12);
        assert!(summary.range.low <= summary.range.high);
    }
}
