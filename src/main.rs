use anyhow::{Context, Result};
use clap::Parser;
use farscombine::{process, Config, Outcome};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Combine a directory of FARS CSV extracts into one deduplicated CSV.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// YAML config file; unset keys keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the `*.csv` extracts
    #[arg(short, long, env = "FARS_INPUT_DIR")]
    input_dir: Option<PathBuf>,

    /// Combined CSV to write
    #[arg(short, long, env = "FARS_OUTPUT")]
    output: Option<PathBuf>,

    /// Print the effective config as YAML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) resolve config ───────────────────────────────────────────
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::from_yaml_file(path)?,
        None => Config::default(),
    };
    if let Some(dir) = cli.input_dir {
        config.input_dir = dir;
    }
    if let Some(out) = cli.output {
        config.output_file = out;
    }

    if cli.print_config {
        print!("{}", config.to_yaml().context("serializing config")?);
        return Ok(());
    }

    // ─── 3) run (validates the config first) ─────────────────────────
    match process::run(&config)? {
        Outcome::Written { path, summary } => {
            info!(
                path = %path.display(),
                files = summary.files_combined,
                rows = summary.rows_written,
                "done"
            );
        }
        Outcome::NoFilesProcessed(_) => info!("nothing to write"),
    }
    Ok(())
}
