//! Run configuration: paths, the target column set, display names and the
//! encodings tried when decoding input files.
//!
//! Every field has a default, so a YAML file only needs the keys it changes:
//!
//! ```yaml
//! input_dir: /data/FARS2021NationalCSV
//! output_file: /data/2021combined.csv
//! encodings: [utf-8, windows-1252]
//! ```

pub mod columns;

use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::error::ConfigError;
use columns::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory scanned for `*.csv` extracts.
    pub input_dir: PathBuf,
    /// Combined CSV destination, overwritten on success.
    pub output_file: PathBuf,
    /// Canonical columns of interest; also the output column order.
    pub target_columns: Vec<String>,
    /// Internal column name → output header.
    pub column_names: BTreeMap<String, String>,
    /// Encoding labels tried in order until one decodes and parses.
    pub encodings: Vec<String>,
    pub impairment_column: String,
    /// Natural key of one crash record.
    pub key_columns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            target_columns: DEFAULT_TARGET_COLUMNS.iter().map(|s| s.to_string()).collect(),
            column_names: DEFAULT_COLUMN_NAMES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            encodings: DEFAULT_ENCODINGS.iter().map(|s| s.to_string()).collect(),
            impairment_column: DEFAULT_IMPAIRMENT_COLUMN.to_string(),
            key_columns: DEFAULT_KEY_COLUMNS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load a YAML config; keys left out keep their defaults.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: Config = serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Check the column and encoding settings hang together before any I/O.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_columns.is_empty() {
            return Err(ConfigError::Invalid("target_columns is empty".into()));
        }

        let mut seen = HashSet::new();
        for col in &self.target_columns {
            if !seen.insert(col.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "target column `{}` listed twice",
                    col
                )));
            }
            if !self.column_names.contains_key(col) {
                return Err(ConfigError::Invalid(format!(
                    "target column `{}` has no display name",
                    col
                )));
            }
        }

        if !seen.contains(self.impairment_column.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "impairment column `{}` is not a target column",
                self.impairment_column
            )));
        }
        if self.key_columns.is_empty() {
            return Err(ConfigError::Invalid("key_columns is empty".into()));
        }
        if let Some(k) = self.key_columns.iter().find(|k| !seen.contains(k.as_str())) {
            return Err(ConfigError::Invalid(format!(
                "key column `{}` is not a target column",
                k
            )));
        }

        if self.encodings.is_empty() {
            return Err(ConfigError::Invalid("no encodings configured".into()));
        }
        if let Some(label) = self
            .encodings
            .iter()
            .find(|l| encoding_rs::Encoding::for_label(l.as_bytes()).is_none())
        {
            return Err(ConfigError::Invalid(format!(
                "unknown encoding label `{}`",
                label
            )));
        }

        Ok(())
    }
}
