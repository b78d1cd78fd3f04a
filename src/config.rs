// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Layer configuration.

/// Constructor-injected configuration for one instrumentation-layer session.
///
/// A layer is created explicitly by its caller and owns its state for the
/// duration of one audit session. There is no global instance.
#[derive(Debug, Clone)]
pub struct LayerConfig {
    /// Highest homology dimension reported (0..=2).
    pub max_dimension: usize,
    /// Whether `observe` evaluates the invariant suite on every call.
    pub check_invariants: bool,
    /// Seed committed as the first entry of the Merkle chain.
    pub merkle_seed: String,
    /// Edges longer than this are excluded from the Rips filtration.
    pub max_edge_length: f64,
    /// Optional hard cap on snapshot size. Exceeding it fails the
    /// observation (status FAILED), it does not abort the caller.
    pub point_budget: Option<usize>,
    /// Starting trust balance. Never decreased by any current code path;
    /// the conservation invariant checks it stays non-negative.
    pub initial_trust: f64,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            max_dimension: 2,
            check_invariants: true,
            merkle_seed: "genesis".to_string(),
            max_edge_length: f64::INFINITY,
            point_budget: None,
            initial_trust: 100.0,
        }
    }
}
