//! Exchange directory discovery and per-directory file selection.
//!
//! Kept out of `tickcast-core` on purpose: the pipeline only ever sees a
//! resolved list of file paths.

use std::fs;
use std::path::PathBuf;

use tickcast_core::RecordStore;

use crate::cli::Cli;
use crate::error::CliError;

/// Resolve the directories to scan: every subdirectory of the working
/// directory by default, or the explicit `--directories` list when
/// auto-discovery is disabled.
pub fn resolve_directories(cli: &Cli) -> Result<Vec<PathBuf>, CliError> {
    if cli.disable_auto_discover {
        if cli.directories.is_empty() {
            return Err(CliError::Usage(String::from(
                "--directories is required when --disable-auto-discover is set",
            )));
        }
        return Ok(cli.directories.clone());
    }

    let mut dirs = Vec::new();
    for entry in fs::read_dir(".")? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        }
    }

    // Deterministic processing order regardless of platform.
    dirs.sort();
    Ok(dirs)
}

/// Take the first `per_dir` candidate files from each directory. A directory
/// that yields fewer candidates than requested produces a warning rather
/// than an error.
pub fn select_files(
    store: &impl RecordStore,
    dirs: &[PathBuf],
    per_dir: usize,
) -> Result<(Vec<PathBuf>, Vec<String>), CliError> {
    let mut files = Vec::new();
    let mut warnings = Vec::new();

    for dir in dirs {
        let candidates = store.list_candidate_files(dir)?;
        let taken = candidates.len().min(per_dir);
        files.extend_from_slice(&candidates[..taken]);

        if taken < per_dir {
            warnings.push(format!(
                "found only {} .csv files in directory '{}' but the recommended number to read from is {}",
                taken,
                dir.display(),
                per_dir
            ));
        }
    }

    Ok((files, warnings))
}

#[cfg(test)]
mod tests {
    use tickcast_core::MemoryStore;

    use super::*;

    #[test]
    fn takes_the_first_n_candidates_per_directory() {
        let store = MemoryStore::new();
        store.insert_file("nyse/a.csv", Vec::new());
        store.insert_file("nyse/b.csv", Vec::new());
        store.insert_file("nyse/c.csv", Vec::new());
        store.insert_file("nasdaq/d.csv", Vec::new());

        let dirs = vec![PathBuf::from("nyse"), PathBuf::from("nasdaq")];
        let (files, warnings) = select_files(&store, &dirs, 2).expect("must select");

        assert_eq!(
            files,
            vec![
                PathBuf::from("nyse/a.csv"),
                PathBuf::from("nyse/b.csv"),
                PathBuf::from("nasdaq/d.csv"),
            ]
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("nasdaq"));
    }

    #[test]
    fn quota_met_exactly_produces_no_warning() {
        let store = MemoryStore::new();
        store.insert_file("lse/a.csv", Vec::new());

        let (files, warnings) =
            select_files(&store, &[PathBuf::from("lse")], 1).expect("must select");

        assert_eq!(files.len(), 1);
        assert!(warnings.is_empty());
    }
}
