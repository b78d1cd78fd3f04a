// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::Serialize;
use std::path::Path;
use toposcope_kernel::observer::compute_betti_numbers;
use toposcope_kernel::types::BettiNumbers;

#[derive(Serialize)]
struct BettiOutput {
    file: String,
    threshold: f64,
    betti_numbers: BettiNumbers,
    euler_characteristic: i64,
    total_features: u64,
}

/// One-shot Betti numbers for a single point-cloud file.
pub fn run(file: &Path, threshold: f64) -> anyhow::Result<()> {
    let cloud = super::load_cloud(file)?;
    let betti = compute_betti_numbers(&cloud, threshold)?;

    let output = BettiOutput {
        file: file.display().to_string(),
        threshold,
        euler_characteristic: betti.euler_characteristic(),
        total_features: betti.total_features(),
        betti_numbers: betti,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
