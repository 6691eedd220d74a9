//! Query Engine
//! Every operation is a pure function of the listings table and its
//! parameters; nothing here holds state or mutates the loaded data.

use polars::prelude::*;
use std::collections::BTreeSet;
use thiserror::Error;

use crate::data::{
    COL_LISTING_TYPE, COL_MIN_NIGHTS, COL_NEIGHBORHOOD, COL_PRICE, COL_REVIEWS_LTM,
    COL_REVIEWS_PER_MONTH,
};
use crate::stats::{PriceRange, PriceSummary};

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

pub struct QueryEngine;

impl QueryEngine {
    /// Rows whose listing type is in `listing_types` AND whose neighborhood is
    /// in `neighborhoods`.
    ///
    /// An empty selection set yields an empty result; callers pass the full
    /// sets to mean "no filter".
    pub fn filter_by_categories(
        df: &DataFrame,
        listing_types: &BTreeSet<String>,
        neighborhoods: &BTreeSet<String>,
    ) -> Result<DataFrame, QueryError> {
        let types = Series::new(
            "selected_types".into(),
            listing_types.iter().cloned().collect::<Vec<String>>(),
        );
        let hoods = Series::new(
            "selected_neighborhoods".into(),
            neighborhoods.iter().cloned().collect::<Vec<String>>(),
        );

        let filtered = df
            .clone()
            .lazy()
            .filter(
                col(COL_LISTING_TYPE)
                    .is_in(lit(types))
                    .and(col(COL_NEIGHBORHOOD).is_in(lit(hoods))),
            )
            .collect()?;
        Ok(filtered)
    }

    /// Prices of listings matching the exact neighborhood and listing type
    /// with `minimum_nights >= min_nights`.
    fn matching_prices(
        df: &DataFrame,
        neighborhood: &str,
        listing_type: &str,
        min_nights: i64,
    ) -> Result<Vec<f64>, QueryError> {
        let subset = df
            .clone()
            .lazy()
            .filter(
                col(COL_NEIGHBORHOOD)
                    .eq(lit(neighborhood))
                    .and(col(COL_LISTING_TYPE).eq(lit(listing_type)))
                    .and(col(COL_MIN_NIGHTS).gt_eq(lit(min_nights))),
            )
            .select([col(COL_PRICE).cast(DataType::Float64)])
            .collect()?;

        let prices = subset
            .column(COL_PRICE)?
            .f64()?
            .into_iter()
            .flatten()
            .collect();
        Ok(prices)
    }

    /// Full descriptive summary of the matching subset, `Ok(None)` when no
    /// listing matches.
    pub fn price_summary(
        df: &DataFrame,
        neighborhood: &str,
        listing_type: &str,
        min_nights: i64,
    ) -> Result<Option<PriceSummary>, QueryError> {
        let prices = Self::matching_prices(df, neighborhood, listing_type, min_nights)?;
        Ok(PriceSummary::from_prices(&prices))
    }

    /// Recommended pricing band: 25th to 75th price percentile over listings
    /// matching the exact neighborhood, exact listing type and a minimum
    /// nights threshold. An empty subset is an explicit `Ok(None)`, never NaN.
    /// The dashboard goes through [`Self::price_summary`], which carries the
    /// same band plus the subset descriptives.
    #[allow(dead_code)]
    pub fn recommend_price_range(
        df: &DataFrame,
        neighborhood: &str,
        listing_type: &str,
        min_nights: i64,
    ) -> Result<Option<PriceRange>, QueryError> {
        let prices = Self::matching_prices(df, neighborhood, listing_type, min_nights)?;
        Ok(PriceRange::from_prices(&prices))
    }

    /// Sum of reviews per month grouped by (neighborhood, listing type),
    /// sorted by the group keys, for chart consumption.
    pub fn aggregate_reviews(df: &DataFrame) -> Result<DataFrame, QueryError> {
        let grouped = df
            .clone()
            .lazy()
            .group_by([col(COL_NEIGHBORHOOD), col(COL_LISTING_TYPE)])
            .agg([col(COL_REVIEWS_PER_MONTH).sum()])
            .sort(
                [COL_NEIGHBORHOOD, COL_LISTING_TYPE],
                SortMultipleOptions::default(),
            )
            .collect()?;
        Ok(grouped)
    }

    /// Non-null values of a numeric column for one listing type, for the
    /// per-type distribution charts.
    pub fn values_for_type(
        df: &DataFrame,
        listing_type: &str,
        value_col: &str,
    ) -> Result<Vec<f64>, QueryError> {
        let selected = df
            .clone()
            .lazy()
            .filter(col(COL_LISTING_TYPE).eq(lit(listing_type)))
            .select([col(value_col).cast(DataType::Float64)])
            .collect()?;

        let values = selected
            .column(value_col)?
            .f64()?
            .into_iter()
            .flatten()
            .collect();
        Ok(values)
    }

    /// `[reviews in the last twelve months, price]` pairs for one listing
    /// type, for the reviews-vs-price scatter.
    pub fn scatter_for_type(
        df: &DataFrame,
        listing_type: &str,
    ) -> Result<Vec<[f64; 2]>, QueryError> {
        let selected = df
            .clone()
            .lazy()
            .filter(col(COL_LISTING_TYPE).eq(lit(listing_type)))
            .select([
                col(COL_REVIEWS_LTM).cast(DataType::Float64),
                col(COL_PRICE).cast(DataType::Float64),
            ])
            .collect()?;

        let reviews = selected.column(COL_REVIEWS_LTM)?.f64()?;
        let prices = selected.column(COL_PRICE)?.f64()?;

        let points = reviews
            .into_iter()
            .zip(prices)
            .filter_map(|(r, p)| Some([r?, p?]))
            .collect();
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_df() -> DataFrame {
        df!(
            COL_LISTING_TYPE => &["Entire home", "Entire home", "Private room", "Private room"],
            COL_NEIGHBORHOOD => &["Centro", "Centro", "Centro", "Norte"],
            COL_PRICE => &[100.0, 200.0, 50.0, 75.0],
            COL_MIN_NIGHTS => &[1i64, 3, 2, 1],
            COL_REVIEWS_LTM => &[10i64, 4, 6, 2],
            COL_REVIEWS_PER_MONTH => &[1.5f64, 0.5, 1.0, 0.25],
        )
        .unwrap()
    }

    fn set_of(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn filter_keeps_exactly_the_matching_rows() {
        let df = sample_df();
        let out = QueryEngine::filter_by_categories(
            &df,
            &set_of(&["Entire home"]),
            &set_of(&["Centro"]),
        )
        .unwrap();

        // No false negatives: both Centro entire homes survive
        assert_eq!(out.height(), 2);
        // No false positives: every remaining row matches both sets
        let types = out.column(COL_LISTING_TYPE).unwrap().str().unwrap();
        let hoods = out.column(COL_NEIGHBORHOOD).unwrap().str().unwrap();
        for i in 0..out.height() {
            assert_eq!(types.get(i), Some("Entire home"));
            assert_eq!(hoods.get(i), Some("Centro"));
        }
    }

    #[test]
    fn full_sets_select_everything() {
        let df = sample_df();
        let out = QueryEngine::filter_by_categories(
            &df,
            &set_of(&["Entire home", "Private room"]),
            &set_of(&["Centro", "Norte"]),
        )
        .unwrap();
        assert_eq!(out.height(), df.height());
    }

    #[test]
    fn empty_selection_sets_yield_an_empty_result() {
        let df = sample_df();
        let out =
            QueryEngine::filter_by_categories(&df, &BTreeSet::new(), &set_of(&["Centro"]))
                .unwrap();
        assert_eq!(out.height(), 0);
    }

    #[test]
    fn filtering_is_idempotent() {
        let df = sample_df();
        let types = set_of(&["Private room"]);
        let hoods = set_of(&["Centro", "Norte"]);

        let once = QueryEngine::filter_by_categories(&df, &types, &hoods).unwrap();
        let twice = QueryEngine::filter_by_categories(&once, &types, &hoods).unwrap();
        assert!(once.equals(&twice));
    }

    #[test]
    fn recommendation_spans_the_quartiles() {
        let df = sample_df();
        let range = QueryEngine::recommend_price_range(&df, "Centro", "Entire home", 1)
            .unwrap()
            .unwrap();

        // Quartiles of [100, 200] with linear interpolation
        assert!((range.low - 125.0).abs() < 1e-9);
        assert!((range.high - 175.0).abs() < 1e-9);
        assert!(range.low <= range.high);
    }

    #[test]
    fn min_nights_threshold_narrows_the_subset() {
        let df = sample_df();
        let range = QueryEngine::recommend_price_range(&df, "Centro", "Entire home", 2)
            .unwrap()
            .unwrap();

        // Only the 3-night listing at 200 qualifies
        assert_eq!(range.low, 200.0);
        assert_eq!(range.high, 200.0);
    }

    #[test]
    fn unknown_neighborhood_is_an_explicit_no_data_outcome() {
        let df = sample_df();
        let result =
            QueryEngine::recommend_price_range(&df, "Atlantis", "Entire home", 1).unwrap();
        assert!(result.is_none());

        let summary = QueryEngine::price_summary(&df, "Atlantis", "Entire home", 1).unwrap();
        assert!(summary.is_none());
    }

    #[test]
    fn reviews_aggregate_sums_per_group() {
        let df = sample_df();
        let out = QueryEngine::aggregate_reviews(&df).unwrap();

        // (Centro, Entire home), (Centro, Private room), (Norte, Private room)
        assert_eq!(out.height(), 3);
        let sums = out.column(COL_REVIEWS_PER_MONTH).unwrap().f64().unwrap();
        assert!((sums.get(0).unwrap() - 2.0).abs() < 1e-12);
        assert!((sums.get(1).unwrap() - 1.0).abs() < 1e-12);
        assert!((sums.get(2).unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn per_type_values_and_scatter_points() {
        let df = sample_df();
        let nights = QueryEngine::values_for_type(&df, "Entire home", COL_MIN_NIGHTS).unwrap();
        assert_eq!(nights, vec![1.0, 3.0]);

        let points = QueryEngine::scatter_for_type(&df, "Private room").unwrap();
        assert_eq!(points, vec![[6.0, 50.0], [2.0, 75.0]]);
    }
}
