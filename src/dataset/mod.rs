//! Dataset Store: acquires, decodes, cleans and holds the survey table.
//!
//! ## Files
//! - `source.rs` — local/remote acquisition with an on-disk cache.
//! - `clean.rs` — decoding, csv parsing, NA handling, column renames.
//!
//! The store is built once per process and only lends the dataset out.

pub mod clean;
pub mod source;

use crate::config::DatasetConfig;
use crate::domain::records::Dataset;

pub use clean::DatasetError;

pub struct DatasetStore {
    source: String,
    dataset: Dataset,
}

impl DatasetStore {
    pub fn load(config: &DatasetConfig, offline: bool) -> anyhow::Result<Self> {
        let bytes = source::read_source(&config.source, config.fetch_timeout_ms, offline)?;
        let dataset = dataset_from_bytes(&bytes, config)?;
        if dataset.is_empty() {
            tracing::warn!(source = %config.source, "dataset has no records");
        }
        tracing::info!(
            source = %config.source,
            records = dataset.len(),
            "dataset loaded"
        );
        Ok(Self {
            source: config.source.clone(),
            dataset,
        })
    }

    pub fn get_dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

pub fn dataset_from_bytes(bytes: &[u8], config: &DatasetConfig) -> Result<Dataset, DatasetError> {
    let text = clean::decode(bytes, &config.encoding)?;
    let records = clean::parse_records(&text, &config.na_values, config.keep_default_na)?;
    Ok(Dataset::new(records))
}
