mod cli;
mod discover;
mod error;
mod output;
mod report;

use clap::Parser;

use tickcast_core::{CsvStore, Pipeline, PipelineConfig, ValidationMode};

use crate::cli::{Cli, DataCheck};
use crate::error::CliError;
use crate::report::RunReport;

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let store = CsvStore::new();
    let dirs = discover::resolve_directories(&cli)?;
    let (files, warnings) =
        discover::select_files(&store, &dirs, cli.files_per_exchange as usize)?;

    let mode = to_validation_mode(cli.data_check);
    let config = PipelineConfig {
        mode,
        output_root: cli.output_dir.clone(),
    };

    let mut pipeline = match cli.seed {
        Some(seed) => Pipeline::with_seed(&store, config, seed),
        None => Pipeline::new(&store, config),
    };
    let outcomes = pipeline.run(&files)?;

    let report = RunReport::new(mode, cli.files_per_exchange, &outcomes, warnings);
    output::render(&report, cli.format, cli.pretty)?;

    if cli.strict && !report.is_clean() {
        return Err(CliError::StrictModeViolation {
            skipped: report.skipped,
            warning_count: report.warnings.len(),
        });
    }

    Ok(())
}

fn to_validation_mode(check: DataCheck) -> ValidationMode {
    match check {
        DataCheck::WholeFile => ValidationMode::WholeFile,
        DataCheck::WindowOnly => ValidationMode::WindowOnly,
        DataCheck::Disabled => ValidationMode::Disabled,
    }
}
