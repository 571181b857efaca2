use bedside_core::models::observation::{Avpu, Observation};
use bedside_core::models::record::EvaluationRecord;
use bedside_scoring::evaluate;
use bedside_store::error::StoreError;
use bedside_store::table::{read_csv, write_csv};
use bedside_store::{CsvRecordStore, MemoryRecordStore, RecordStore};

fn sample_record(avpu: Avpu, crt: f64) -> EvaluationRecord {
    let mut obs = Observation::baseline();
    obs.consciousness.avpu = avpu;
    obs.capillary_refill_secs = crt;
    EvaluationRecord::from(&evaluate(&obs))
}

#[test]
fn missing_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvRecordStore::new(dir.path().join("evaluations.csv"));
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn empty_file_loads_as_empty_and_accepts_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("evaluations.csv");
    std::fs::write(&path, "").unwrap();

    let mut store = CsvRecordStore::new(&path);
    assert!(store.load_all().unwrap().is_empty());

    let record = sample_record(Avpu::Alert, 2.0);
    assert_eq!(store.append(&record).unwrap(), 1);
    assert_eq!(store.load_all().unwrap(), vec![record]);

    std::fs::write(&path, "\n  \n").unwrap();
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn append_accumulates_records_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = CsvRecordStore::new(dir.path().join("nested").join("evaluations.csv"));

    let first = sample_record(Avpu::Alert, 2.0);
    let second = sample_record(Avpu::Pain, 3.5);
    assert_eq!(store.append(&first).unwrap(), 1);
    assert_eq!(store.append(&second).unwrap(), 2);

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded, vec![first, second]);
    assert!(!dir.path().join("nested").join("evaluations.csv.tmp").exists());
}

#[test]
fn export_round_trips_every_field() {
    let records = vec![
        sample_record(Avpu::Alert, 2.0),
        sample_record(Avpu::Voice, 4.2),
        sample_record(Avpu::Unresponsive, 0.7),
    ];
    let bytes = write_csv(&records).unwrap();
    assert_eq!(read_csv(&bytes).unwrap(), records);
}

#[test]
fn export_header_matches_columns() {
    let bytes = write_csv(&[sample_record(Avpu::Alert, 2.0)]).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let header = text.lines().next().unwrap();
    assert_eq!(header, EvaluationRecord::COLUMNS.join(","));
}

#[test]
fn empty_export_still_has_a_header() {
    let store = MemoryRecordStore::new();
    let bytes = store.export_csv().unwrap();
    assert_eq!(
        String::from_utf8(bytes).unwrap().trim_end(),
        EvaluationRecord::COLUMNS.join(",")
    );
    assert!(read_csv(&write_csv(&[]).unwrap()).unwrap().is_empty());
}

#[test]
fn corrupt_file_is_reported_and_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("evaluations.csv");
    std::fs::write(&path, "name,age\nbob,42\n").unwrap();

    let mut store = CsvRecordStore::new(&path);
    let err = store.append(&sample_record(Avpu::Alert, 2.0)).unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "name,age\nbob,42\n");
}

#[test]
fn memory_store_appends_and_exports() {
    let mut store = MemoryRecordStore::new();
    let record = sample_record(Avpu::Alert, 2.0);
    store.append(&record).unwrap();

    let exported = store.export_csv().unwrap();
    assert_eq!(read_csv(&exported).unwrap(), vec![record]);
}
