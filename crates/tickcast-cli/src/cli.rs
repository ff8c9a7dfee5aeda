//! CLI argument definitions for tickcast.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--files-per-exchange` | required | Files to read per exchange directory |
//! | `--data-check` | `whole-file` | Structural validation strictness |
//! | `--disable-auto-discover` | `false` | Turn off working-directory scanning |
//! | `--directories` | — | Explicit directory list |
//! | `--output-dir` | `predictions` | Mirror root for extended series |
//! | `--seed` | — | Deterministic window sampling |
//! | `--format` | `table` | Run report format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat skips and warnings as failures |

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Read market data and predict the next three data points for each ticker.
///
/// Data is read from .csv files located in directories whose names represent
/// the respective stock exchange. From each file, ten consecutive data
/// points are extracted from a randomly chosen starting point, extended with
/// three predictions, and mirrored under the output directory.
#[derive(Debug, Parser)]
#[command(
    name = "tickcast",
    author,
    version,
    about = "Sample historic ticker prices and extrapolate three future points"
)]
pub struct Cli {
    /// Number of files to read from each exchange directory (typically 1 or 2).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub files_per_exchange: u32,

    /// Structural check applied to input data before prediction.
    ///
    /// - whole-file: check the entire .csv file before sampling
    /// - window-only: check only the ten sampled data points
    /// - disabled: skip structural checks entirely (most efficient)
    ///
    /// A file or window that fails the check is skipped, not processed.
    #[arg(long, value_enum, default_value_t = DataCheck::WholeFile)]
    pub data_check: DataCheck,

    /// Disable auto-discovery of exchange directories in the working
    /// directory.
    #[arg(long, default_value_t = false)]
    pub disable_auto_discover: bool,

    /// Directories to look into for .csv files. Ignored unless
    /// --disable-auto-discover is set.
    #[arg(long, num_args = 1..)]
    pub directories: Vec<PathBuf>,

    /// Root directory the extended series are mirrored into.
    #[arg(long, default_value = "predictions")]
    pub output_dir: PathBuf,

    /// Seed for the window sampler; omit for a fresh random window per run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format for the run report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Exit non-zero when any file was skipped or any directory came up
    /// short of its file quota.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

/// Validation strictness options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DataCheck {
    /// Check the entire file before sampling.
    WholeFile,
    /// Check only the ten sampled rows.
    WindowOnly,
    /// Skip structural checks entirely.
    Disabled,
}

/// Run report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary table.
    Table,
    /// Single JSON object.
    Json,
}
