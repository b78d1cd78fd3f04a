// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Audit-report projections.
//!
//! These structs are the JSON-shaped surface consumed by downstream
//! compliance renderers. They are serialized deterministically as typed
//! serde structs; nothing in them can feed back into the observed system.

use crate::assertion::ObservationResult;
use crate::types::{BettiNumbers, ObservationStatus};
use serde::{Deserialize, Serialize};

/// Per-observation projection inside the aggregate report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationSummary {
    pub source_id: String,
    pub status: ObservationStatus,
    pub betti_numbers: BettiNumbers,
    pub all_invariants_satisfied: bool,
    pub merkle_hash: String,
}

impl ObservationSummary {
    pub fn from_result(result: &ObservationResult) -> Self {
        Self {
            source_id: result.annotation().source_id().to_string(),
            status: result.status(),
            betti_numbers: *result.annotation().betti(),
            all_invariants_satisfied: result.all_invariants_satisfied(),
            merkle_hash: result.merkle_lineage().to_string(),
        }
    }
}

/// Aggregate audit report over one layer session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub layer_version: String,
    pub total_observations: usize,
    pub trust_balance: f64,
    pub trust_invariant_satisfied: bool,
    pub all_observations_valid: bool,
    pub trust_conserved_all: bool,
    pub merkle_root: String,
    pub merkle_chain_length: usize,
    pub observations: Vec<ObservationSummary>,
    pub compliance_assertion: String,
}

impl AuditReport {
    pub const COMPLIANCE_ASSERTION: &'static str =
        "All annotations are non-authoritative, read-only observations; \
         this layer cannot influence or override the observed system.";

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
