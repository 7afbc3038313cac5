//! Tool configuration loaded from TOML.
//!
//! Every key is optional; a missing file means all defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATASET_SOURCE: &str =
    "https://github.com/jkropko/DS-6001/raw/master/localdata/gss2018.csv";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub explore: ExploreConfig,
    pub facets: FacetsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    pub source: String,
    pub encoding: String,
    pub na_values: Vec<String>,
    /// Also treat the usual spreadsheet null spellings (`NA`, `NaN`, `NULL`, ...) as missing.
    pub keep_default_na: bool,
    pub fetch_timeout_ms: u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_DATASET_SOURCE.to_string(),
            encoding: "windows-1252".to_string(),
            na_values: [
                "IAP",
                "IAP,DK,NA,uncodeable",
                "NOT SURE",
                "DK",
                "IAP, DK, NA, uncodeable",
                ".a",
                "CAN'T CHOOSE",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            keep_default_na: true,
            fetch_timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ExploreConfig {
    pub default_feature: String,
    pub default_group: String,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            default_feature: "male_breadwinner".to_string(),
            default_group: "sex".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FacetsConfig {
    pub bins: usize,
}

impl Default for FacetsConfig {
    fn default() -> Self {
        Self { bins: 6 }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            json: false,
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/gss-explorer/config.toml"))
}

/// Loads `explicit` if given (it must exist), else the default path if present.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let p = default_config_path()?;
            if !p.exists() {
                return Ok(Config::default());
            }
            p
        }
    };
    let raw = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("cannot read config {}: {}", path.display(), e))?;
    let config = parse_config(&raw)?;
    if config.facets.bins == 0 {
        anyhow::bail!("facets.bins must be at least 1");
    }
    Ok(config)
}

pub fn parse_config(raw: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(raw)?)
}
