//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// Pipebuilder - Configure and simulate a text-classification pipeline
#[derive(Parser, Debug)]
#[command(name = "pipebuilder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dataset label to preselect (e.g. "IMDB Reviews")
    #[arg(short, long)]
    pub dataset: Option<String>,

    /// CSV file to import as the dataset.
    /// Files that are not CSV are rejected with a notice and the dataset is unchanged.
    #[arg(short, long)]
    pub import: Option<PathBuf>,

    /// Preprocessing methods to preselect (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub preprocessing: Vec<String>,

    /// Metrics to preselect (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub metrics: Vec<String>,

    /// Visualization types to preselect (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub visualizations: Vec<String>,

    /// Run without the interactive wizard, using the flags above
    #[arg(long, default_value = "false")]
    pub headless: bool,

    /// Skip the start confirmation prompt (requires --headless)
    #[arg(long, default_value = "false", requires = "headless")]
    pub no_confirm: bool,

    /// Milliseconds between progress increments of the simulated run
    #[arg(long, default_value = "100", value_parser = validate_tick_ms)]
    pub tick_ms: u64,

    /// Print results as JSON (requires --headless)
    #[arg(long, default_value = "false", requires = "headless")]
    pub json: bool,

    /// Write debug logs to stderr
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the datasets, preprocessing methods, metrics and visualizations on offer
    Catalog,
}

impl Cli {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Validator for tick_ms parameter
fn validate_tick_ms(s: &str) -> Result<u64, String> {
    let value: u64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !(1..=10_000).contains(&value) {
        Err(format!("tick_ms must be between 1 and 10000, got {}", value))
    } else {
        Ok(value)
    }
}
