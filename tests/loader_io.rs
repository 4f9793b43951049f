use shipdata::loader::{self, LoadError};
use std::fs;
use tempfile::tempdir;

#[test]
fn load_json_dataset() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ships.json");
    fs::write(
        &path,
        r#"{
            "data": [
                {"SHIPNAME": "Titanic", "COUNTRY": "UK", "SPEED": 21, "LAT": 41.7, "LON": -49.9},
                {"SHIPNAME": "Nomad", "TYPE_SUMMARY": null}
            ],
            "totalCount": 250
        }"#,
    )
    .unwrap();

    let ds = loader::load_dataset(&path).unwrap();
    assert_eq!(ds.len(), 2);
    // Reported count is kept as-is, even when it disagrees with the records.
    assert_eq!(ds.total_count(), 250);
    let first = &ds.records()[0];
    assert_eq!(first.name().as_deref(), Some("Titanic"));
    assert_eq!(first.position(), Some((41.7, -49.9)));
    assert_eq!(ds.records()[1].type_summary(), "Unknown");
}

#[test]
fn load_csv_dataset_with_empty_cells() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ships.CSV");
    fs::write(
        &path,
        "SHIPNAME,COUNTRY,SPEED,LAT,LON\nTitanic,UK,21,41.7,-49.9\nNomad,, ,,\n",
    )
    .unwrap();

    let ds = loader::load_dataset(&path).unwrap();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.total_count(), 2);
    assert_eq!(ds.records()[0].speed(), Some(21.0));
    let nomad = &ds.records()[1];
    assert!(!nomad.has("COUNTRY"));
    assert_eq!(nomad.speed(), None);
    assert_eq!(nomad.position(), None);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let e = loader::load_dataset(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(e, LoadError::Io { .. }));
    assert!(e.to_string().starts_with("cannot read"));
}

#[test]
fn json_without_data_array_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"totalCount": 3}"#).unwrap();
    assert!(matches!(
        loader::load_dataset(&path).unwrap_err(),
        LoadError::Json { .. }
    ));

    fs::write(&path, r#"{"data": {"SHIPNAME": "x"}}"#).unwrap();
    assert!(matches!(
        loader::load_dataset(&path).unwrap_err(),
        LoadError::Json { .. }
    ));
}
