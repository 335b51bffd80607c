pub mod config;
pub mod error;
pub mod process;
pub mod source;

pub use config::Config;
pub use error::{ConfigError, PipelineError};
pub use process::{run, Outcome, RunSummary, Table};
