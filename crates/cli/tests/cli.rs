use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn workspace_path(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..").join(rel)
}

#[test]
fn report_prints_reference_loads_and_writes_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let json_path = dir.path().join("reference.json");

    Command::cargo_bin("fin_report")
        .expect("fin_report bin")
        .args([
            "--config",
            workspace_path("configs/fins").to_str().unwrap(),
            "--fin",
            "reference",
            "--airspeed",
            "50",
            "--json",
            json_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fin Report: Reference"))
        .stdout(predicate::str::contains(
            "Tapered trapezoidal fin on a 80 mm body tube",
        ))
        .stdout(predicate::str::contains("q = 1531.25 Pa"))
        .stdout(predicate::str::contains("AR = 0.8000"));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).expect("json file"))
            .expect("valid json");
    assert_eq!(value["fin"], "Reference");
    assert!(value["loads"]["equivalent_tip_load_n"].as_f64().unwrap() > 0.0);
}

#[test]
fn report_uses_named_condition() {
    Command::cargo_bin("fin_report")
        .expect("fin_report bin")
        .args([
            "--config",
            workspace_path("configs/fins").to_str().unwrap(),
            "--condition",
            "MAX-Q",
            "--conditions",
            workspace_path("configs/conditions.yaml").to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("V = 250.00 m/s, gust = 12.00 m/s"));
}

#[test]
fn report_rejects_unknown_condition() {
    Command::cargo_bin("fin_report")
        .expect("fin_report bin")
        .args([
            "--config",
            workspace_path("configs/fins").to_str().unwrap(),
            "--condition",
            "landing",
            "--conditions",
            workspace_path("configs/conditions.yaml").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'landing' not found in catalog"));
}

#[test]
fn report_rejects_supersonic_airspeed() {
    Command::cargo_bin("fin_report")
        .expect("fin_report bin")
        .args([
            "--config",
            workspace_path("configs/fins").to_str().unwrap(),
            "--airspeed",
            "400",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("subsonic"));
}

#[test]
fn report_rejects_zero_airspeed() {
    Command::cargo_bin("fin_report")
        .expect("fin_report bin")
        .args([
            "--config",
            workspace_path("configs/fins").to_str().unwrap(),
            "--airspeed",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("airspeed must be positive"));
}

#[test]
fn sweep_writes_csv_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("out/sweep.csv");

    Command::cargo_bin("fin_sweep")
        .expect("fin_sweep bin")
        .args([
            "--config",
            workspace_path("configs/fins").to_str().unwrap(),
            "--fin",
            "Swept",
            "--from",
            "20",
            "--to",
            "300",
            "--steps",
            "8",
            "--output",
            csv_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 8 samples for Swept"));

    let mut reader = csv::Reader::from_path(&csv_path).expect("csv reader");
    let headers = reader.headers().expect("headers").clone();
    let tip_idx = headers
        .iter()
        .position(|h| h == "equivalent_tip_load_n")
        .expect("tip load column");
    let tip_loads: Vec<f64> = reader
        .records()
        .map(|r| r.expect("record")[tip_idx].parse().expect("number"))
        .collect();
    assert_eq!(tip_loads.len(), 8);
    assert!(tip_loads.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn sweep_to_stdout_is_pure_csv() {
    Command::cargo_bin("fin_sweep")
        .expect("fin_sweep bin")
        .args([
            "--config",
            workspace_path("configs/fins").to_str().unwrap(),
            "--from",
            "30",
            "--to",
            "60",
            "--steps",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("fin,airspeed_m_s"))
        .stdout(predicate::str::contains("Wrote").not());
}
