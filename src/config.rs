//! Application configuration
//! Optional JSON file next to the binary; absent file means defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "listinglens.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path to the listings CSV.
    pub data_path: PathBuf,
    /// Initial nights value for the price simulator slider.
    pub default_min_nights: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("airbnb.csv"),
            default_min_nights: 2,
        }
    }
}

impl AppConfig {
    /// Read the config file if present; a missing file is not an error, a
    /// malformed one is.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::load(Path::new("no_such_config.json")).unwrap();
        assert_eq!(config.data_path, PathBuf::from("airbnb.csv"));
        assert_eq!(config.default_min_nights, 2);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let path = std::env::temp_dir().join("listinglens_config_partial.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(br#"{"data_path": "listings.csv"}"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.data_path, PathBuf::from("listings.csv"));
        assert_eq!(config.default_min_nights, 2);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = std::env::temp_dir().join("listinglens_config_bad.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"{not json").unwrap();

        let result = AppConfig::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
