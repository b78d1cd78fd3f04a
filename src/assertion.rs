// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Invariant assertions and observation results.

use crate::annotation::TopologicalAnnotation;
use crate::attest;
use crate::types::{unix_millis, InvariantType, ObservationStatus};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Outcome of one invariant check, with evidence and its own attestation.
/// Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct InvariantAssertion {
    invariant: InvariantType,
    satisfied: bool,
    evidence: FxHashMap<String, String>,
    timestamp_ms: u64,
    attestation_hash: String,
}

impl InvariantAssertion {
    pub fn new(
        invariant: InvariantType,
        satisfied: bool,
        evidence: FxHashMap<String, String>,
    ) -> Self {
        let attestation_hash = attest::assertion_digest(invariant, satisfied, &evidence);
        Self {
            invariant,
            satisfied,
            evidence,
            timestamp_ms: unix_millis(),
            attestation_hash,
        }
    }

    pub fn invariant(&self) -> InvariantType {
        self.invariant
    }

    pub fn satisfied(&self) -> bool {
        self.satisfied
    }

    pub fn evidence(&self) -> &FxHashMap<String, String> {
        &self.evidence
    }

    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    pub fn attestation_hash(&self) -> &str {
        &self.attestation_hash
    }
}

/// The attested outcome of one `observe` call. Retained forever in the
/// owning layer's history; never edited or removed.
#[derive(Debug, Clone, Serialize)]
pub struct ObservationResult {
    annotation: TopologicalAnnotation,
    status: ObservationStatus,
    invariants: Vec<InvariantAssertion>,
    execution_time_ms: u64,
    merkle_lineage: String,
}

impl ObservationResult {
    pub fn new(
        annotation: TopologicalAnnotation,
        status: ObservationStatus,
        invariants: Vec<InvariantAssertion>,
        execution_time_ms: u64,
        merkle_lineage: String,
    ) -> Self {
        Self {
            annotation,
            status,
            invariants,
            execution_time_ms,
            merkle_lineage,
        }
    }

    pub fn annotation(&self) -> &TopologicalAnnotation {
        &self.annotation
    }

    pub fn status(&self) -> ObservationStatus {
        self.status
    }

    pub fn invariants(&self) -> &[InvariantAssertion] {
        &self.invariants
    }

    pub fn execution_time_ms(&self) -> u64 {
        self.execution_time_ms
    }

    /// Merkle root of the layer's chain at the moment this result was
    /// produced.
    pub fn merkle_lineage(&self) -> &str {
        &self.merkle_lineage
    }

    pub fn all_invariants_satisfied(&self) -> bool {
        self.invariants.iter().all(|a| a.satisfied())
    }

    /// True unless a TRUST_CONSERVED assertion exists and failed. Vacuously
    /// true when invariant checking was disabled for the session.
    pub fn trust_conserved(&self) -> bool {
        self.invariants
            .iter()
            .filter(|a| a.invariant() == InvariantType::TrustConserved)
            .all(|a| a.satisfied())
    }

    /// Single-observation audit projection.
    pub fn audit_summary(&self) -> crate::report::ObservationSummary {
        crate::report::ObservationSummary::from_result(self)
    }

    /// Full JSON projection of the result, annotation and assertions
    /// included.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
