//! Run report assembly.
//!
//! Per-file outcomes come back from the pipeline as plain values; this
//! module folds them into a single report the renderer can print. Nothing
//! here writes to a global warning channel.

use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use tickcast_core::{FileOutcome, FileStatus, ValidationMode};

/// Machine-readable summary of one pipeline run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub run_id: String,
    pub generated_at: String,
    pub data_check: ValidationMode,
    pub files_per_exchange: u32,
    pub emitted: usize,
    pub skipped: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    pub outcomes: Vec<OutcomeSummary>,
}

/// One processed file in the report.
#[derive(Debug, Serialize)]
pub struct OutcomeSummary {
    pub file: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_written: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RunReport {
    pub fn new(
        data_check: ValidationMode,
        files_per_exchange: u32,
        outcomes: &[FileOutcome],
        warnings: Vec<String>,
    ) -> Self {
        let summaries: Vec<OutcomeSummary> = outcomes.iter().map(OutcomeSummary::from).collect();
        let emitted = outcomes.iter().filter(|o| o.is_emitted()).count();

        Self {
            run_id: Uuid::new_v4().to_string(),
            generated_at: OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .expect("current time must be RFC3339 formattable"),
            data_check,
            files_per_exchange,
            emitted,
            skipped: outcomes.len() - emitted,
            warnings,
            outcomes: summaries,
        }
    }

    /// True when nothing was skipped and no warnings surfaced.
    pub fn is_clean(&self) -> bool {
        self.skipped == 0 && self.warnings.is_empty()
    }
}

impl From<&FileOutcome> for OutcomeSummary {
    fn from(outcome: &FileOutcome) -> Self {
        match &outcome.status {
            FileStatus::Emitted {
                output_path,
                rows_written,
            } => Self {
                file: outcome.source_path.display().to_string(),
                status: "emitted",
                output: Some(output_path.display().to_string()),
                rows_written: Some(*rows_written),
                reason: None,
            },
            FileStatus::Skipped { reason } => Self {
                file: outcome.source_path.display().to_string(),
                status: "skipped",
                output: None,
                rows_written: None,
                reason: Some(reason.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tickcast_core::PipelineError;

    use super::*;

    fn emitted_outcome() -> FileOutcome {
        FileOutcome {
            source_path: PathBuf::from("nyse/a.csv"),
            status: FileStatus::Emitted {
                output_path: PathBuf::from("predictions/nyse/a.csv"),
                rows_written: 13,
            },
        }
    }

    fn skipped_outcome() -> FileOutcome {
        FileOutcome {
            source_path: PathBuf::from("nyse/b.csv"),
            status: FileStatus::Skipped {
                reason: PipelineError::InsufficientData { available: 4 },
            },
        }
    }

    #[test]
    fn counts_emitted_and_skipped_files() {
        let report = RunReport::new(
            ValidationMode::WholeFile,
            1,
            &[emitted_outcome(), skipped_outcome()],
            Vec::new(),
        );

        assert_eq!(report.emitted, 1);
        assert_eq!(report.skipped, 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn clean_report_has_no_skips_and_no_warnings() {
        let report = RunReport::new(
            ValidationMode::WholeFile,
            1,
            &[emitted_outcome()],
            Vec::new(),
        );
        assert!(report.is_clean());

        let warned = RunReport::new(
            ValidationMode::WholeFile,
            1,
            &[emitted_outcome()],
            vec![String::from("directory came up short")],
        );
        assert!(!warned.is_clean());
    }

    #[test]
    fn skip_reason_is_carried_into_the_summary() {
        let report = RunReport::new(ValidationMode::Disabled, 2, &[skipped_outcome()], Vec::new());

        assert_eq!(report.outcomes[0].status, "skipped");
        let reason = report.outcomes[0].reason.as_deref().expect("reason set");
        assert!(reason.contains("insufficient data"));
    }
}
