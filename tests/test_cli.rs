use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("prayer-calendar").unwrap();
    cmd.current_dir(dir.path()).env("RUST_LOG", "error");
    cmd
}

const ISLAMABAD: [&str; 8] = [
    "--start",
    "2024-01-01",
    "--end",
    "2024-01-01",
    "--lat",
    "33.6844",
    "--lon",
    "73.0479",
];

#[test]
fn test_writes_calendar_file() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .args(ISLAMABAD)
        .args(["--duration", "15", "--dhuhr-duration", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "prayer_times.ics file created successfully.",
        ));

    let body = std::fs::read_to_string(dir.path().join("prayer_times.ics")).unwrap();
    assert_eq!(body.matches("BEGIN:VEVENT").count(), 6);
    assert!(body.contains("SUMMARY:Dhuhr\r\n"));
}

#[test]
fn test_blank_dhuhr_duration_uses_default() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .args(ISLAMABAD)
        .args(["--duration", "20", "--dhuhr-duration", ""])
        .assert()
        .success();
    let body = std::fs::read_to_string(dir.path().join("prayer_times.ics")).unwrap();
    // default +6 offset: Dhuhr at 13:11
    assert!(body.contains("DTSTART:20240101T131100\r\nDTEND:20240101T133100\r\n"));
}

#[test]
fn test_print_table() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .args(ISLAMABAD)
        .args(["--duration", "15", "--utc-offset", "5", "--print-table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fajr"))
        .stdout(predicate::str::contains("2024-01-01  05:43"));
}

#[test]
fn test_southern_western_coordinates() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .args([
            "--start", "2024-03-01", "--end", "2024-03-03", "--lat", "-34.6037", "--lon",
            "-58.3816", "--utc-offset", "-3", "--method", "mwl", "--asr", "standard",
            "--duration", "10",
        ])
        .assert()
        .success();
    let body = std::fs::read_to_string(dir.path().join("prayer_times.ics")).unwrap();
    assert_eq!(body.matches("BEGIN:VEVENT").count(), 18);
}

#[test]
fn test_zero_duration_fails_without_file() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .args(ISLAMABAD)
        .args(["--duration", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"));
    assert!(!dir.path().join("prayer_times.ics").exists());
}

#[test]
fn test_bad_date_names_field() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .args([
            "--start", "01/01/2024", "--end", "2024-01-01", "--lat", "33.6", "--lon", "73.0",
            "--duration", "15",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("start date"))
        .stderr(predicate::str::contains("YYYY-MM-DD"));
    assert!(!dir.path().join("prayer_times.ics").exists());
}

#[test]
fn test_end_before_start_fails() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .args([
            "--start", "2024-01-02", "--end", "2024-01-01", "--lat", "33.6", "--lon", "73.0",
            "--duration", "15",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date range"));
    assert!(!dir.path().join("prayer_times.ics").exists());
}

#[test]
fn test_unknown_method_fails() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .args(ISLAMABAD)
        .args(["--duration", "15", "--method", "Atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown calculation method: Atlantis"));
}

#[test]
fn test_out_of_range_latitude_fails() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .args([
            "--start", "2024-01-01", "--end", "2024-01-01", "--lat", "95", "--lon", "73.0",
            "--duration", "15",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid coordinate"));
}

#[test]
fn test_non_numeric_duration_fails() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .args(ISLAMABAD)
        .args(["--duration", "fifteen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("whole number of minutes"));
}
