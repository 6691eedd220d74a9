//! Listings CSV Loader
//! Reads the listings file, renames the raw column headers to stable names and
//! drops every row without a price.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{COL_LISTING_TYPE, COL_NEIGHBORHOOD, COL_PRICE};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("No data loaded")]
    NoData,
}

/// Read, rename and clean the listings file.
///
/// `room_type` becomes `listing_type` and `neighbourhood` becomes
/// `neighborhood`. Rows with a missing price are removed; every retained
/// record has a non-null price.
pub fn load_listings(path: &Path) -> Result<DataFrame, LoaderError> {
    let raw = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .rename(
            ["room_type", "neighbourhood"],
            [COL_LISTING_TYPE, COL_NEIGHBORHOOD],
            true,
        )
        .collect()?;

    let total = raw.height();
    let df = raw
        .lazy()
        .drop_nulls(Some(vec![col(COL_PRICE)]))
        .collect()?;

    if df.height() < total {
        log::info!(
            "dropped {} of {} rows without a price",
            total - df.height(),
            total
        );
    }

    Ok(df)
}

/// Owns the listings table for the process lifetime.
///
/// The file is read exactly once; every later call hands out the same
/// immutable table by reference. Nothing mutates it after load.
pub struct DataLoader {
    df: Option<DataFrame>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            file_path: None,
        }
    }

    /// Load the listings file on first call; later calls return the table
    /// already in memory unchanged.
    pub fn get_or_load(&mut self, path: &Path) -> Result<&DataFrame, LoaderError> {
        if self.df.is_none() {
            let df = load_listings(path)?;
            log::info!("loaded {} listings from {}", df.height(), path.display());
            self.file_path = Some(path.to_path_buf());
            self.df = Some(df);
        }
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Get a reference to the loaded DataFrame.
    pub fn dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    /// Number of loaded rows.
    pub fn row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Path of the loaded file.
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Sorted unique non-null values of a column, for the sidebar option lists.
    pub fn unique_values(&self, column: &str) -> Vec<String> {
        let Some(df) = &self.df else {
            return Vec::new();
        };

        df.column(column)
            .ok()
            .and_then(|col| col.unique().ok())
            .map(|unique| {
                let series = unique.as_materialized_series();
                let mut values: Vec<String> = (0..series.len())
                    .filter_map(|i| {
                        let val = series.get(i).ok()?;
                        if val.is_null() {
                            None
                        } else {
                            Some(val.to_string().trim_matches('"').to_string())
                        }
                    })
                    .collect();
                values.sort();
                values
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str =
        "room_type,neighbourhood,price,minimum_nights,number_of_reviews_ltm,reviews_per_month\n";

    fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn renames_columns_and_drops_rows_without_price() {
        let csv = format!(
            "{HEADER}Entire home,Centro,100,1,10,1.5\n\
             Private room,Centro,,2,5,0.5\n\
             Entire home,Norte,200,3,8,2.0\n"
        );
        let path = write_temp_csv("listinglens_loader_rename.csv", &csv);
        let df = load_listings(&path).unwrap();
        std::fs::remove_file(&path).ok();

        // One of three rows had no price
        assert_eq!(df.height(), 2);
        assert!(df.column(COL_LISTING_TYPE).is_ok());
        assert!(df.column(COL_NEIGHBORHOOD).is_ok());
        assert!(df.column("room_type").is_err());
        assert_eq!(df.column(COL_PRICE).unwrap().null_count(), 0);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_listings(Path::new("definitely_not_here.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn get_or_load_reads_the_file_once() {
        let csv = format!("{HEADER}Entire home,Centro,100,1,10,1.5\n");
        let path = write_temp_csv("listinglens_loader_once.csv", &csv);

        let mut loader = DataLoader::new();
        loader.get_or_load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        // File is gone but the memoized table is still served
        let df = loader.get_or_load(&path).unwrap();
        assert_eq!(df.height(), 1);
        assert_eq!(loader.row_count(), 1);
    }

    #[test]
    fn unique_values_are_sorted_and_non_null() {
        let csv = format!(
            "{HEADER}Private room,Norte,80,1,2,0.3\n\
             Entire home,Centro,100,1,10,1.5\n\
             Entire home,Norte,200,3,8,2.0\n"
        );
        let path = write_temp_csv("listinglens_loader_unique.csv", &csv);
        let mut loader = DataLoader::new();
        loader.get_or_load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(
            loader.unique_values(COL_LISTING_TYPE),
            vec!["Entire home".to_string(), "Private room".to_string()]
        );
        assert_eq!(
            loader.unique_values(COL_NEIGHBORHOOD),
            vec!["Centro".to_string(), "Norte".to_string()]
        );
    }
}
