// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod betti;
pub mod observe;
pub mod verify_report;

use anyhow::Context;
use std::path::Path;
use toposcope_kernel::dist::PointCloud;

/// Loads a point cloud from a JSON file.
///
/// Accepted shapes: an array of numbers (a 1-D series, treated as (n,1)),
/// or an array of equal-length coordinate rows.
pub fn load_cloud(path: &Path) -> anyhow::Result<PointCloud> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read point cloud file {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let items = value
        .as_array()
        .with_context(|| format!("{}: expected a top-level JSON array", path.display()))?;

    if items.is_empty() {
        return Ok(PointCloud::from_series(&[])?);
    }

    if items[0].is_array() {
        let mut rows = Vec::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            let row = item
                .as_array()
                .with_context(|| format!("{}: row {idx} is not an array", path.display()))?;
            let mut coords = Vec::with_capacity(row.len());
            for (axis, v) in row.iter().enumerate() {
                coords.push(v.as_f64().with_context(|| {
                    format!("{}: row {idx}, axis {axis} is not a number", path.display())
                })?);
            }
            rows.push(coords);
        }
        Ok(PointCloud::from_rows(&rows)?)
    } else {
        let mut series = Vec::with_capacity(items.len());
        for (idx, v) in items.iter().enumerate() {
            series.push(
                v.as_f64()
                    .with_context(|| format!("{}: entry {idx} is not a number", path.display()))?,
            );
        }
        Ok(PointCloud::from_series(&series)?)
    }
}
