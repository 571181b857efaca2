use std::path::{Path, PathBuf};

use bedside_core::models::record::EvaluationRecord;

use crate::RecordStore;
use crate::error::StoreError;
use crate::table::{read_csv, write_csv};

/// Record store backed by a single CSV file.
///
/// Appends rewrite the whole file through a temp file and a rename, so a
/// reader never sees a half-written row and a failed append leaves the
/// previous contents in place. Writers in separate processes are not
/// serialized against each other.
#[derive(Debug, Clone)]
pub struct CsvRecordStore {
    path: PathBuf,
}

impl CsvRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for CsvRecordStore {
    fn append(&mut self, record: &EvaluationRecord) -> Result<usize, StoreError> {
        let mut records = self.load_all()?;
        records.push(record.clone());

        let bytes = write_csv(&records)?;
        write_atomic(&self.path, &bytes)?;

        tracing::info!(
            path = %self.path.display(),
            record.id = %record.id,
            total = records.len(),
            "evaluation record saved"
        );
        Ok(records.len())
    }

    fn load_all(&self) -> Result<Vec<EvaluationRecord>, StoreError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no record file yet");
            return Ok(Vec::new());
        }

        let bytes = std::fs::read(&self.path)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            tracing::debug!(path = %self.path.display(), "record file is empty");
            return Ok(Vec::new());
        }
        read_csv(&bytes).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("csv.tmp");
    let written = std::fs::write(&tmp_path, bytes).and_then(|_| std::fs::rename(&tmp_path, path));
    if let Err(e) = written {
        // The original file is untouched; only the temp file may be left over.
        if tmp_path.exists()
            && let Err(cleanup) = std::fs::remove_file(&tmp_path)
        {
            tracing::warn!(path = %tmp_path.display(), error = %cleanup, "failed to remove temp file");
        }
        return Err(e.into());
    }
    Ok(())
}
