//! Per-file orchestration: sample, validate, predict, emit.

use std::fmt::{Display, Formatter};
use std::path::{Component, Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::domain::{RawRow, Window};
use crate::error::{PipelineError, StoreError};
use crate::predictor;
use crate::sampler;
use crate::store::RecordStore;
use crate::validator;

/// How much of a source file is structurally checked before prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Check every row of the file before sampling.
    WholeFile,
    /// Check only the ten sampled rows.
    WindowOnly,
    /// Skip structural checks; a window that does not even parse still
    /// skips the file.
    Disabled,
}

impl ValidationMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WholeFile => "whole-file",
            Self::WindowOnly => "window-only",
            Self::Disabled => "disabled",
        }
    }
}

impl Display for ValidationMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal state for one input file.
#[derive(Debug, Clone, PartialEq)]
pub enum FileStatus {
    /// The extended series was written to `output_path`.
    Emitted {
        output_path: PathBuf,
        rows_written: usize,
    },
    /// The file was left alone; `reason` says why.
    Skipped { reason: PipelineError },
}

/// Outcome of processing one input file, returned to the caller instead of
/// being pushed through a process-wide warning channel.
#[derive(Debug, Clone, PartialEq)]
pub struct FileOutcome {
    pub source_path: PathBuf,
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn is_emitted(&self) -> bool {
        matches!(self.status, FileStatus::Emitted { .. })
    }
}

/// Pipeline settings supplied by the shell.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub mode: ValidationMode,
    /// Root the extended series are mirrored into.
    pub output_root: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::WholeFile,
            output_root: PathBuf::from("predictions"),
        }
    }
}

/// Runs the sample -> validate -> predict -> emit sequence over input files,
/// one file at a time.
pub struct Pipeline<'a, S: RecordStore> {
    store: &'a S,
    config: PipelineConfig,
    rng: StdRng,
}

impl<'a, S: RecordStore> Pipeline<'a, S> {
    pub fn new(store: &'a S, config: PipelineConfig) -> Self {
        Self {
            store,
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sampling for reproducible runs and tests.
    pub fn with_seed(store: &'a S, config: PipelineConfig, seed: u64) -> Self {
        Self {
            store,
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Process every file independently. A skipped file never aborts the
    /// run; store-level I/O failures do.
    pub fn run(&mut self, files: &[PathBuf]) -> Result<Vec<FileOutcome>, StoreError> {
        let mut outcomes = Vec::with_capacity(files.len());
        for file in files {
            outcomes.push(self.process_file(file)?);
        }
        Ok(outcomes)
    }

    pub fn process_file(&mut self, path: &Path) -> Result<FileOutcome, StoreError> {
        let rows = self.store.read_all_rows(path)?;

        match self.extend_series(rows) {
            Ok(series) => {
                let output_path = self.output_path_for(path);
                self.store.write_rows(&output_path, &series)?;
                Ok(FileOutcome {
                    source_path: path.to_path_buf(),
                    status: FileStatus::Emitted {
                        output_path,
                        rows_written: series.len(),
                    },
                })
            }
            Err(reason) => Ok(FileOutcome {
                source_path: path.to_path_buf(),
                status: FileStatus::Skipped { reason },
            }),
        }
    }

    fn extend_series(&mut self, rows: Vec<RawRow>) -> Result<Vec<RawRow>, PipelineError> {
        if self.config.mode == ValidationMode::WholeFile {
            validator::validate_rows(&rows)?;
        }

        let sampled = sampler::sample_window(&rows, &mut self.rng)?;

        if self.config.mode == ValidationMode::WindowOnly {
            validator::validate_rows(&sampled)?;
        }

        let window = Window::from_rows(sampled)?;
        let prediction = predictor::predict(&window)?;

        let mut series = window.into_rows();
        series.extend(prediction.to_rows());
        Ok(series)
    }

    /// Mirror the source path under the output root. Root and prefix
    /// components are dropped so absolute inputs stay inside the root.
    fn output_path_for(&self, source: &Path) -> PathBuf {
        let relative: PathBuf = source
            .components()
            .filter(|component| matches!(component, Component::Normal(_)))
            .collect();
        self.config.output_root.join(relative)
    }
}
