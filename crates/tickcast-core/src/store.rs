//! Storage seam between the pipeline and its surroundings.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::RawRow;
use crate::error::StoreError;

/// Capabilities the pipeline needs from the outside world.
///
/// The pipeline is agnostic to how rows are actually kept: the shipped
/// implementation is [`CsvStore`](crate::CsvStore) over the local
/// filesystem, and [`MemoryStore`] backs tests and dry runs.
pub trait RecordStore {
    /// Candidate input files inside `dir`, in deterministic order.
    fn list_candidate_files(&self, dir: &Path) -> Result<Vec<PathBuf>, StoreError>;

    /// Every row of one input file, in source order.
    fn read_all_rows(&self, path: &Path) -> Result<Vec<RawRow>, StoreError>;

    /// Write `rows` to `path`, creating parent directories as needed.
    fn write_rows(&self, path: &Path, rows: &[RawRow]) -> Result<(), StoreError>;
}

/// In-memory [`RecordStore`] keyed by path.
///
/// Single-threaded by design, like the pipeline itself.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<BTreeMap<PathBuf, Vec<RawRow>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an input file.
    pub fn insert_file(&self, path: impl Into<PathBuf>, rows: Vec<RawRow>) {
        self.files.borrow_mut().insert(path.into(), rows);
    }

    /// Rows last written to `path`, if any.
    pub fn rows_at(&self, path: &Path) -> Option<Vec<RawRow>> {
        self.files.borrow().get(path).cloned()
    }
}

impl RecordStore for MemoryStore {
    fn list_candidate_files(&self, dir: &Path) -> Result<Vec<PathBuf>, StoreError> {
        let files = self
            .files
            .borrow()
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .cloned()
            .collect();
        Ok(files)
    }

    fn read_all_rows(&self, path: &Path) -> Result<Vec<RawRow>, StoreError> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::Read {
                path: path.to_path_buf(),
                source: csv::Error::from(io::Error::new(
                    io::ErrorKind::NotFound,
                    "no such file in memory store",
                )),
            })
    }

    fn write_rows(&self, path: &Path, rows: &[RawRow]) -> Result<(), StoreError> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), rows.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_direct_children_of_the_directory() {
        let store = MemoryStore::new();
        store.insert_file("nyse/a.csv", Vec::new());
        store.insert_file("nyse/b.csv", Vec::new());
        store.insert_file("nasdaq/c.csv", Vec::new());

        let files = store
            .list_candidate_files(Path::new("nyse"))
            .expect("must list");
        assert_eq!(
            files,
            vec![PathBuf::from("nyse/a.csv"), PathBuf::from("nyse/b.csv")]
        );
    }

    #[test]
    fn reading_a_missing_file_is_a_store_error() {
        let store = MemoryStore::new();
        let err = store
            .read_all_rows(Path::new("missing.csv"))
            .expect_err("must fail");
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[test]
    fn written_rows_are_readable_back() {
        let store = MemoryStore::new();
        let rows = vec![RawRow::new("AAPL", "01-01-2021", "10.00")];
        store
            .write_rows(Path::new("out.csv"), &rows)
            .expect("must write");
        assert_eq!(
            store.read_all_rows(Path::new("out.csv")).expect("must read"),
            rows
        );
    }
}
