// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

/// Machine-checkable invariants evaluated on every observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvariantType {
    /// The trust balance has never gone negative.
    TrustConserved,
    /// The observed snapshot is byte-identical before and after processing.
    ReadOnly,
    /// The produced annotation carries no authority.
    NonAuthoritative,
    /// Identical inputs always yield identical annotations.
    Deterministic,
    /// The Merkle lineage of prior observations is intact.
    ProvenancePreserved,
}

impl InvariantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvariantType::TrustConserved => "TRUST_CONSERVED",
            InvariantType::ReadOnly => "READ_ONLY",
            InvariantType::NonAuthoritative => "NON_AUTHORITATIVE",
            InvariantType::Deterministic => "DETERMINISTIC",
            InvariantType::ProvenancePreserved => "PROVENANCE_PRESERVED",
        }
    }
}

/// Lifecycle state of one observation.
///
/// `Pending` and `Skipped` are declared for forward compatibility; the
/// current control flow only ever produces `Completed` and `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObservationStatus {
    Pending,
    Completed,
    Failed,
    Skipped,
}

impl ObservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObservationStatus::Pending => "PENDING",
            ObservationStatus::Completed => "COMPLETED",
            ObservationStatus::Failed => "FAILED",
            ObservationStatus::Skipped => "SKIPPED",
        }
    }
}
