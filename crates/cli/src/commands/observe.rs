// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use anyhow::Context;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use toposcope_kernel::config::LayerConfig;
use toposcope_kernel::layer::TopologicalInstrumentationLayer;
use toposcope_kernel::types::ObservationStatus;

/// Runs one instrumentation session: each input file becomes one
/// observation, in argument order, and the comprehensive audit report is
/// written as pretty JSON to `out` (or stdout).
pub fn run(
    files: &[PathBuf],
    max_dimension: usize,
    merkle_seed: &str,
    source_prefix: &str,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let config = LayerConfig {
        max_dimension,
        merkle_seed: merkle_seed.to_string(),
        ..LayerConfig::default()
    };
    let mut layer = TopologicalInstrumentationLayer::new(config);

    for (idx, file) in files.iter().enumerate() {
        let cloud = super::load_cloud(file)?;

        let mut metadata = FxHashMap::default();
        metadata.insert("file".to_string(), file.display().to_string());
        metadata.insert(
            "observed_at".to_string(),
            chrono::Utc::now().to_rfc3339(),
        );

        let source_id = format!("{source_prefix}-{idx}");
        let result = layer.observe(&cloud, &source_id, Some(&metadata));
        if result.status() == ObservationStatus::Failed {
            tracing::warn!(source_id, file = %file.display(), "observation failed");
        }
    }

    let report = layer.comprehensive_audit_report();
    let json = report.to_json().context("failed to render audit report")?;

    match out {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?,
        None => println!("{json}"),
    }

    eprintln!(
        "observed {} snapshot(s); merkle root {}",
        report.total_observations, report.merkle_root
    );
    Ok(())
}
