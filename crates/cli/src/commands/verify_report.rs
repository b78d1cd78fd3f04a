// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use anyhow::Context;
use std::path::Path;
use toposcope_kernel::report::AuditReport;
use toposcope_kernel::types::ObservationStatus;

/// Structural consistency checks over an emitted audit report.
///
/// The report is self-describing, so verification is cross-field: chain
/// length against observation counts, the root against the last recorded
/// lineage, and the aggregate flags against the per-observation records.
/// An optional expected root pins the report to a known chain head.
pub fn run(report_path: &Path, expected_root: Option<&str>) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(report_path)
        .with_context(|| format!("failed to read report {}", report_path.display()))?;
    let report: AuditReport =
        serde_json::from_str(&text).context("report is not a valid audit report")?;

    let mut failures: Vec<String> = Vec::new();

    // 1. Chain length: one seed entry plus one link per completed
    //    observation (failures never advance the chain).
    let completed = report
        .observations
        .iter()
        .filter(|o| o.status == ObservationStatus::Completed)
        .count();
    if report.merkle_chain_length != completed + 1 {
        failures.push(format!(
            "merkle_chain_length {} does not match {} completed observations + seed",
            report.merkle_chain_length, completed
        ));
    }

    // 2. The root must be the lineage of the last completed observation.
    if let Some(last) = report
        .observations
        .iter()
        .rev()
        .find(|o| o.status == ObservationStatus::Completed)
    {
        if last.merkle_hash != report.merkle_root {
            failures.push("merkle_root does not match last completed lineage".to_string());
        }
    }

    // 3. Aggregate flags must agree with the per-observation records.
    if report.total_observations != report.observations.len() {
        failures.push(format!(
            "total_observations {} does not match {} recorded observations",
            report.total_observations,
            report.observations.len()
        ));
    }
    let all_valid = report
        .observations
        .iter()
        .all(|o| o.status == ObservationStatus::Completed && o.all_invariants_satisfied);
    if report.all_observations_valid != all_valid {
        failures.push("all_observations_valid flag is inconsistent".to_string());
    }
    if report.trust_invariant_satisfied != (report.trust_balance >= 0.0) {
        failures.push("trust_invariant_satisfied flag is inconsistent".to_string());
    }

    // 4. Optional pin to a known root.
    if let Some(expected) = expected_root {
        if report.merkle_root != expected {
            failures.push(format!(
                "merkle_root {} does not match expected {}",
                report.merkle_root, expected
            ));
        }
    }

    if failures.is_empty() {
        println!("VERIFIED");
        println!("observations: {}", report.total_observations);
        println!("merkle root:  {}", report.merkle_root);
        Ok(())
    } else {
        for failure in &failures {
            eprintln!("FAIL: {failure}");
        }
        anyhow::bail!("report verification failed with {} issue(s)", failures.len())
    }
}
