//! CSV encoding of the record table.

use bedside_core::models::record::EvaluationRecord;

use crate::error::StoreError;

/// Encode records as CSV. An empty slice still produces the header row.
pub fn write_csv(records: &[EvaluationRecord]) -> Result<Vec<u8>, StoreError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if records.is_empty() {
        writer.write_record(EvaluationRecord::COLUMNS)?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .into_inner()
        .map_err(|e| StoreError::Io(e.into_error()))
}

/// Decode CSV produced by [`write_csv`]. The header must match exactly.
pub fn read_csv(bytes: &[u8]) -> Result<Vec<EvaluationRecord>, StoreError> {
    let mut reader = csv::Reader::from_reader(bytes);

    let headers = reader.headers()?;
    if headers.iter().ne(EvaluationRecord::COLUMNS) {
        return Err(StoreError::UnexpectedColumns {
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let records = reader
        .deserialize()
        .collect::<Result<Vec<EvaluationRecord>, csv::Error>>()?;
    Ok(records)
}
