// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use tempfile::tempdir;
use toposcope_cli::commands::{betti, load_cloud, observe, verify_report};
use toposcope_kernel::report::AuditReport;

fn write_file(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_observe_then_verify_workflow() {
    let dir = tempdir().unwrap();

    // Two clusters plus a lone series.
    let cloud_a = write_file(
        dir.path(),
        "a.json",
        "[[0.0, 0.0], [0.01, 0.0], [10.0, 0.0], [10.01, 0.0], [10.02, 0.0]]",
    );
    let cloud_b = write_file(dir.path(), "b.json", "[1.0, 2.0, 3.0]");
    let report_path = dir.path().join("report.json");

    let result = observe::run(
        &[cloud_a, cloud_b],
        2,
        "integration-seed",
        "snap",
        Some(report_path.as_path()),
    );
    assert!(result.is_ok());

    // The emitted report must pass structural verification.
    let result = verify_report::run(report_path.as_path(), None);
    assert!(result.is_ok(), "fresh report should verify");

    // Pinning to the actual root succeeds; a wrong root fails.
    let report: AuditReport =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report.total_observations, 2);
    assert!(report.all_observations_valid);

    let result = verify_report::run(report_path.as_path(), Some(&report.merkle_root));
    assert!(result.is_ok());

    let result = verify_report::run(report_path.as_path(), Some("deadbeef"));
    assert!(result.is_err(), "wrong expected root must fail");
}

#[test]
fn test_verify_detects_tampered_report() {
    let dir = tempdir().unwrap();
    let cloud = write_file(dir.path(), "c.json", "[0.0, 1.0, 2.0]");
    let report_path = dir.path().join("report.json");

    observe::run(&[cloud], 2, "seed", "snap", Some(report_path.as_path())).unwrap();

    // Tamper: swap the recorded root for another hex string.
    let mut report: AuditReport =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    report.merkle_root = "0".repeat(64);
    std::fs::write(&report_path, serde_json::to_string_pretty(&report).unwrap()).unwrap();

    let result = verify_report::run(report_path.as_path(), None);
    assert!(result.is_err(), "tampered root must fail verification");
}

#[test]
fn test_betti_command_and_cloud_loading() {
    let dir = tempdir().unwrap();

    let series = write_file(dir.path(), "series.json", "[0.0, 0.5, 9.0]");
    let cloud = load_cloud(series.as_path()).unwrap();
    assert_eq!(cloud.len(), 3);
    assert_eq!(cloud.dim(), 1);

    assert!(betti::run(series.as_path(), 1.0).is_ok());

    let rows = write_file(dir.path(), "rows.json", "[[0.0, 1.0], [2.0, 3.0]]");
    let cloud = load_cloud(rows.as_path()).unwrap();
    assert_eq!(cloud.len(), 2);
    assert_eq!(cloud.dim(), 2);

    let ragged = write_file(dir.path(), "ragged.json", "[[0.0, 1.0], [2.0]]");
    assert!(load_cloud(ragged.as_path()).is_err());

    let not_json = write_file(dir.path(), "bad.json", "not json");
    assert!(load_cloud(not_json.as_path()).is_err());
}
