// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Persistence diagrams.

use crate::error::TopoResult;
use crate::types::{BettiNumbers, PersistenceInterval};
use serde::{Deserialize, Serialize};

/// The full collection of persistence intervals for one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceDiagram {
    intervals: Vec<PersistenceInterval>,
    max_dimension: usize,
}

impl PersistenceDiagram {
    pub fn new(max_dimension: usize) -> Self {
        Self {
            intervals: Vec::new(),
            max_dimension,
        }
    }

    pub fn push(&mut self, interval: PersistenceInterval) {
        if interval.dimension > self.max_dimension {
            self.max_dimension = interval.dimension;
        }
        self.intervals.push(interval);
    }

    pub fn intervals(&self) -> &[PersistenceInterval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn max_dimension(&self) -> usize {
        self.max_dimension
    }

    /// Intervals of one dimension.
    pub fn dimension(&self, d: usize) -> impl Iterator<Item = &PersistenceInterval> {
        self.intervals.iter().filter(move |i| i.dimension == d)
    }

    /// Betti numbers at a filtration threshold: per dimension, the count of
    /// intervals with `birth <= t < death`.
    ///
    /// Correction rule: a non-empty complex always has nonzero 0th homology,
    /// so beta_0 is floored to 1 whenever the diagram is non-empty. The floor
    /// applies to beta_0 only.
    pub fn betti_numbers(&self, threshold: f64) -> TopoResult<BettiNumbers> {
        let mut counts = [0i64; 3];
        for interval in &self.intervals {
            if interval.dimension < 3 && interval.alive_at(threshold) {
                counts[interval.dimension] += 1;
            }
        }
        if !self.intervals.is_empty() && counts[0] == 0 {
            counts[0] = 1;
        }
        BettiNumbers::new(counts[0], counts[1], counts[2])
    }

    /// Intervals whose persistence strictly exceeds `min_persistence`.
    /// Essential (infinite) intervals are always included.
    pub fn persistent_features(&self, min_persistence: f64) -> Vec<PersistenceInterval> {
        self.intervals
            .iter()
            .filter(|i| i.is_essential() || i.persistence() > min_persistence)
            .copied()
            .collect()
    }

    /// Sum of finite persistences across all dimensions.
    pub fn total_finite_persistence(&self) -> f64 {
        self.intervals
            .iter()
            .filter(|i| !i.is_essential())
            .map(|i| i.persistence())
            .sum()
    }

    /// Coarse distance proxy between two diagrams: absolute difference of
    /// summed finite persistences, normalized by the larger interval count.
    ///
    /// This is NOT the bottleneck metric. It does no interval matching and
    /// satisfies no triangle inequality; it exists only for coarse
    /// regression checks between diagrams of the same source.
    pub fn bottleneck_distance_proxy(&self, other: &PersistenceDiagram) -> f64 {
        let diff = (self.total_finite_persistence() - other.total_finite_persistence()).abs();
        let scale = self.len().max(other.len()).max(1) as f64;
        diff / scale
    }
}
