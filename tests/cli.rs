use predicates::prelude::*;
use std::fs;
use assert_cmd::Command;
use tempfile::tempdir;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("shipdata").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("shipdata"))
        .stdout(predicate::str::contains("--data"));
}

#[test]
fn piped_session_runs_queries_and_exports() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("ships_data.json");
    fs::write(
        &data,
        r#"{"data": [
            {"SHIPNAME": "Titanic", "COUNTRY": "UK", "TYPE_SUMMARY": "Passenger", "SPEED": 21, "LAT": 0, "LON": 0},
            {"SHIPNAME": "Nomad", "COUNTRY": "France", "SPEED": "8"}
        ], "totalCount": 2}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("shipdata").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("SHIPDATA_FILE")
        .write_stdin("1\n4\n6 tit\n7\n8\nexit\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Loaded 2 ship records (totalCount: 2)"))
        .stdout(predicate::str::contains("There are 2 ships in the file."))
        .stdout(predicate::str::contains(
            "Countries of all the ships without duplicates:\nFrance\nUK\n",
        ))
        .stdout(predicate::str::contains("Ships matching 'tit':\nTitanic\n"))
        .stdout(predicate::str::contains(
            "Speed histogram saved as 'speed_histogram.png'",
        ))
        .stdout(predicate::str::contains("Ship map saved as 'ships_map.html'"))
        .stdout(predicate::str::contains("Exiting the program."));

    assert!(dir.path().join("speed_histogram.png").exists());
    let html = fs::read_to_string(dir.path().join("ships_map.html")).unwrap();
    assert!(html.contains(r#""popup":"Titanic""#));
}

#[test]
fn load_failure_aborts_before_prompt() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("shipdata").unwrap();
    cmd.current_dir(dir.path())
        .args(["--data", "missing.json"])
        .write_stdin("1\nexit\n");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Error loading data: cannot read missing.json"))
        .stdout(predicate::str::contains("Welcome").not());
}
