use assert_cmd::Command;
use calamine::{open_workbook, Reader, Xlsx};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn txfilter(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("txfilter").unwrap();
    cmd.env("TXFILTER_CONFIG_DIR", config_dir.path())
        .env_remove("RUST_LOG")
        .current_dir(config_dir.path());
    cmd
}

/// Sheet names and the first sheet's cells as text
fn read_workbook(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let names = workbook.sheet_names();
    let range = workbook.worksheet_range(&names[0]).unwrap();
    let cells = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    (names, cells)
}

#[test]
fn test_list_all() {
    let dir = TempDir::new().unwrap();
    txfilter(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("10 of 10 transactions (no filters)"));
}

#[test]
fn test_list_by_name_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    txfilter(&dir)
        .args(["list", "--name", "DAVID"])
        .assert()
        .success()
        .stdout(predicate::str::contains("180.90"))
        .stdout(predicate::str::contains("380.60"))
        .stdout(predicate::str::contains("Chris Brown").not())
        .stdout(predicate::str::contains("2 of 10 transactions"));
}

#[test]
fn test_list_march() {
    let dir = TempDir::new().unwrap();
    txfilter(&dir)
        .args(["list", "--from", "03-01-2023", "--to", "03-31-2023"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chris Brown"))
        .stdout(predicate::str::contains("Sarah Miller"))
        .stdout(predicate::str::contains("4 of 10 transactions"));
}

#[test]
fn test_list_one_sided_range_ignored() {
    let dir = TempDir::new().unwrap();
    txfilter(&dir)
        .args(["list", "--from", "2023-02-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 of 10 transactions"));
}

#[test]
fn test_list_inverted_amounts_empty() {
    let dir = TempDir::new().unwrap();
    txfilter(&dir)
        .args(["list", "--min", "300", "--max", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions match"))
        .stdout(predicate::str::contains("0 of 10 transactions"));
}

#[test]
fn test_export_default_file() {
    let dir = TempDir::new().unwrap();
    txfilter(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 10 transactions"));

    let (names, cells) = read_workbook(&dir.path().join("filtered_data.xlsx"));
    assert_eq!(names, vec!["Filtered Data"]);
    assert_eq!(cells.len(), 11);
    assert_eq!(cells[0], vec!["date", "name", "amount"]);
}

#[test]
fn test_export_david_rows() {
    let dir = TempDir::new().unwrap();
    txfilter(&dir)
        .args(["export", "--name", "david"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 transactions"));

    let (_, cells) = read_workbook(&dir.path().join("filtered_data.xlsx"));
    assert_eq!(
        cells,
        vec![
            vec!["date", "name", "amount"],
            vec!["03-15-2023", "David Wilson", "180.9"],
            vec!["03-21-2023", "David Wilson", "380.6"],
        ]
    );
}

#[test]
fn test_export_empty_view_still_writes() {
    let dir = TempDir::new().unwrap();
    txfilter(&dir)
        .args(["export", "--name", "nobody", "--output", "empty.xlsx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 0 transactions"));

    let (names, cells) = read_workbook(&dir.path().join("empty.xlsx"));
    assert_eq!(names, vec!["Filtered Data"]);
    assert_eq!(cells, vec![vec!["date", "name", "amount"]]);
}

#[test]
fn test_export_csv() {
    let dir = TempDir::new().unwrap();
    txfilter(&dir)
        .args(["export", "--name", "david", "-o", "out.dat", "--format", "csv"])
        .assert()
        .success();

    let contents = std::fs::read_to_string(dir.path().join("out.dat")).unwrap();
    assert_eq!(
        contents,
        "date,name,amount\n03-15-2023,David Wilson,180.9\n03-21-2023,David Wilson,380.6\n"
    );
}

#[test]
fn test_config_shows_paths() {
    let dir = TempDir::new().unwrap();
    txfilter(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("Filtered Data"));
}

#[test]
fn test_config_init_writes_settings_file() {
    let dir = TempDir::new().unwrap();
    let settings_file = dir.path().join("config.json");
    assert!(!settings_file.exists());

    txfilter(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote settings to:"));

    let contents = std::fs::read_to_string(&settings_file).unwrap();
    assert!(contents.contains(r#""sheet_name": "Filtered Data""#));
    assert!(contents.contains(r#""tick_rate_ms": 250"#));
}

#[test]
fn test_config_init_keeps_clamped_tick_rate() {
    let dir = TempDir::new().unwrap();
    let settings_file = dir.path().join("config.json");
    std::fs::write(&settings_file, r#"{"tick_rate_ms": 0, "sheet_name": "Q1"}"#).unwrap();

    txfilter(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tick rate:   1 ms"));

    let contents = std::fs::read_to_string(&settings_file).unwrap();
    assert!(contents.contains(r#""sheet_name": "Q1""#));
    assert!(contents.contains(r#""tick_rate_ms": 1"#));
}
