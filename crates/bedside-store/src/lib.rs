//! bedside-store
//!
//! Append-only persistence for evaluation records, plus export of the whole
//! collection as CSV.

pub mod csv_file;
pub mod error;
pub mod memory;
pub mod table;

use bedside_core::models::record::EvaluationRecord;

use crate::error::StoreError;

pub use csv_file::CsvRecordStore;
pub use memory::MemoryRecordStore;

/// An append-only collection of evaluation records.
pub trait RecordStore {
    /// Add one record. Either the whole record is stored or nothing changes.
    /// Returns the number of records now held.
    fn append(&mut self, record: &EvaluationRecord) -> Result<usize, StoreError>;

    /// All records, oldest first.
    fn load_all(&self) -> Result<Vec<EvaluationRecord>, StoreError>;

    /// All records as CSV bytes, header included.
    fn export_csv(&self) -> Result<Vec<u8>, StoreError> {
        table::write_csv(&self.load_all()?)
    }
}
