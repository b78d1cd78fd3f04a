// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Persistent-homology observer: one snapshot in, one annotation out.

use crate::annotation::TopologicalAnnotation;
use crate::config::LayerConfig;
use crate::diagram::PersistenceDiagram;
use crate::dist::{distance_matrix, PointCloud};
use crate::error::TopoResult;
use crate::filtration::HomologyEngine;
use crate::types::BettiNumbers;

/// Orchestrates distance -> filtration -> diagram -> annotation for one
/// snapshot. The only externally observable side effect is the per-instance
/// observation counter.
pub struct PersistentHomologyObserver {
    engine: HomologyEngine,
    observation_count: u64,
}

impl PersistentHomologyObserver {
    pub fn new(max_dimension: usize) -> Self {
        Self {
            engine: HomologyEngine::new(max_dimension),
            observation_count: 0,
        }
    }

    pub fn from_config(config: &LayerConfig) -> Self {
        Self {
            engine: HomologyEngine::new(config.max_dimension)
                .with_max_edge_length(config.max_edge_length)
                .with_point_budget(config.point_budget),
            observation_count: 0,
        }
    }

    /// Observes one snapshot. An owned, independent copy of `data` is taken
    /// before any processing; the caller's buffer is never aliased or
    /// written to.
    pub fn observe(
        &mut self,
        data: &PointCloud,
        source_id: &str,
    ) -> TopoResult<TopologicalAnnotation> {
        let snapshot = data.clone();

        let distances = distance_matrix(&snapshot);
        let diagram = self.engine.compute(&distances)?;
        let betti = diagram.betti_numbers(0.0)?;

        self.observation_count += 1;
        tracing::debug!(
            source_id,
            points = snapshot.len(),
            beta_0 = betti.beta_0,
            beta_1 = betti.beta_1,
            beta_2 = betti.beta_2,
            "homology observed"
        );

        Ok(TopologicalAnnotation::new(source_id, betti, diagram))
    }

    pub fn observation_count(&self) -> u64 {
        self.observation_count
    }
}

/// Pure convenience wrapper: persistence diagram of a point cloud.
pub fn compute_persistent_homology(
    cloud: &PointCloud,
    max_dimension: usize,
) -> TopoResult<PersistenceDiagram> {
    HomologyEngine::new(max_dimension).compute(&distance_matrix(cloud))
}

/// Pure convenience wrapper: Betti numbers of a point cloud at a threshold.
pub fn compute_betti_numbers(cloud: &PointCloud, threshold: f64) -> TopoResult<BettiNumbers> {
    compute_persistent_homology(cloud, 2)?.betti_numbers(threshold)
}
