//! Local-filesystem CSV implementation of [`RecordStore`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::RawRow;
use crate::error::StoreError;
use crate::store::RecordStore;

/// Reads and writes headerless three-field CSV files on the local
/// filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvStore;

impl CsvStore {
    pub fn new() -> Self {
        Self
    }
}

impl RecordStore for CsvStore {
    fn list_candidate_files(&self, dir: &Path) -> Result<Vec<PathBuf>, StoreError> {
        let entries = fs::read_dir(dir).map_err(|source| StoreError::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::ListDir {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            let is_csv = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
            if is_csv {
                files.push(path);
            }
        }

        // Directory iteration order is platform-dependent.
        files.sort();
        Ok(files)
    }

    fn read_all_rows(&self, path: &Path) -> Result<Vec<RawRow>, StoreError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|source| StoreError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|source| StoreError::Read {
                path: path.to_path_buf(),
                source,
            })?;

            // Rows with missing fields surface as empty strings so the
            // validator can reject them instead of aborting the whole run.
            rows.push(RawRow::new(
                record.get(0).unwrap_or_default(),
                record.get(1).unwrap_or_default(),
                record.get(2).unwrap_or_default(),
            ));
        }

        Ok(rows)
    }

    fn write_rows(&self, path: &Path, rows: &[RawRow]) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let mut writer =
            csv::Writer::from_path(path).map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        for row in rows {
            writer
                .write_record([row.ticker.as_str(), row.date.as_str(), row.price.as_str()])
                .map_err(|source| StoreError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;
        }

        writer.flush().map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source: csv::Error::from(source),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn round_trips_rows_through_disk() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("aapl.csv");
        let rows = vec![
            RawRow::new("AAPL", "01-01-2021", "10.00"),
            RawRow::new("AAPL", "02-01-2021", "11.00"),
        ];

        let store = CsvStore::new();
        store.write_rows(&path, &rows).expect("must write");

        assert_eq!(store.read_all_rows(&path).expect("must read"), rows);
    }

    #[test]
    fn lists_csv_files_sorted_and_skips_everything_else() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("b.csv"), "X,01-01-2021,1.00\n").expect("write");
        fs::write(temp.path().join("a.csv"), "X,01-01-2021,1.00\n").expect("write");
        fs::write(temp.path().join("notes.txt"), "not market data").expect("write");
        fs::create_dir(temp.path().join("sub.csv")).expect("mkdir");

        let store = CsvStore::new();
        let files = store
            .list_candidate_files(temp.path())
            .expect("must list");

        assert_eq!(
            files,
            vec![temp.path().join("a.csv"), temp.path().join("b.csv")]
        );
    }

    #[test]
    fn short_rows_surface_with_empty_fields() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("short.csv");
        fs::write(&path, "AAPL,01-01-2021\n").expect("write");

        let store = CsvStore::new();
        let rows = store.read_all_rows(&path).expect("must read");

        assert_eq!(rows, vec![RawRow::new("AAPL", "01-01-2021", "")]);
    }

    #[test]
    fn listing_a_missing_directory_fails() {
        let store = CsvStore::new();
        let err = store
            .list_candidate_files(Path::new("definitely/not/here"))
            .expect_err("must fail");
        assert!(matches!(err, StoreError::ListDir { .. }));
    }
}
