// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("input directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("bad input directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("combined table has no `{0}` column")]
    MissingColumn(String),

    #[error("failed to write {}: {source}", .path.display())]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: SinkError,
    },
}

/// Underlying cause of a failed output write.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// A file could not be read under any configured encoding.
#[derive(Debug, Error)]
#[error("{} unreadable with [{}]: {cause}", .path.display(), .tried.join(", "))]
pub struct DecodeError {
    pub path: PathBuf,
    pub tried: Vec<String>,
    pub cause: String,
}

/// A file shares no columns with the target set.
#[derive(Debug, Error)]
#[error("none of the target columns are present")]
pub struct SchemaMismatch;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}
