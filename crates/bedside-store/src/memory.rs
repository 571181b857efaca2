use bedside_core::models::record::EvaluationRecord;

use crate::RecordStore;
use crate::error::StoreError;

/// Keeps records in memory only. Used for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: Vec<EvaluationRecord>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryRecordStore {
    fn append(&mut self, record: &EvaluationRecord) -> Result<usize, StoreError> {
        self.records.push(record.clone());
        Ok(self.records.len())
    }

    fn load_all(&self) -> Result<Vec<EvaluationRecord>, StoreError> {
        Ok(self.records.clone())
    }
}
