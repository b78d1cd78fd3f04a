// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

/// A persistence interval [birth, death) for one topological feature.
///
/// `death` may be `f64::INFINITY` for essential features that never die
/// within the filtration. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersistenceInterval {
    pub birth: f64,
    pub death: f64,
    pub dimension: usize,
}

impl PersistenceInterval {
    pub fn new(birth: f64, death: f64, dimension: usize) -> Self {
        Self {
            birth,
            death,
            dimension,
        }
    }

    /// Lifetime of the feature (infinite for essential classes).
    pub fn persistence(&self) -> f64 {
        self.death - self.birth
    }

    /// Essential features survive the entire filtration.
    pub fn is_essential(&self) -> bool {
        self.death.is_infinite()
    }

    /// Whether the feature is alive at the given filtration threshold:
    /// `birth <= t < death`.
    pub fn alive_at(&self, threshold: f64) -> bool {
        self.birth <= threshold && threshold < self.death
    }
}
