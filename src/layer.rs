// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! The stateful instrumentation facade.
//!
//! Owns the trust balance, the Merkle chain and the observation history for
//! one audit session. `observe` runs to completion on the caller's thread;
//! the chain append and the history append happen together, so the recorded
//! lineage always matches the recorded history.

use crate::annotation::TopologicalAnnotation;
use crate::assertion::{InvariantAssertion, ObservationResult};
use crate::attest;
use crate::chain::MerkleChain;
use crate::config::LayerConfig;
use crate::diagram::PersistenceDiagram;
use crate::dist::PointCloud;
use crate::error::TopoResult;
use crate::observer::PersistentHomologyObserver;
use crate::report::{AuditReport, ObservationSummary};
use crate::types::{BettiNumbers, InvariantType, ObservationStatus};
use rustc_hash::FxHashMap;
use std::time::Instant;

/// Schema version stamped into every audit report.
pub const LAYER_VERSION: &str = "1.0.0";

/// Metadata key under which a failed observation carries its error message.
pub const FAILURE_KEY: &str = "failure";

pub struct TopologicalInstrumentationLayer {
    config: LayerConfig,
    observer: PersistentHomologyObserver,
    trust_balance: f64,
    chain: MerkleChain,
    history: Vec<ObservationResult>,
}

impl TopologicalInstrumentationLayer {
    pub fn new(config: LayerConfig) -> Self {
        let observer = PersistentHomologyObserver::from_config(&config);
        let chain = MerkleChain::new(&config.merkle_seed);
        let trust_balance = config.initial_trust;
        Self {
            config,
            observer,
            trust_balance,
            chain,
            history: Vec::new(),
        }
    }

    /// Observes one snapshot and records the attested outcome.
    ///
    /// Propagation policy: observe and report, never abort. Computation
    /// failures inside the pipeline become a FAILED result; the method only
    /// returns an error-free `ObservationResult`, never an `Err`. Malformed
    /// shapes cannot reach this method at all: `PointCloud` construction is
    /// the fail-fast validation boundary.
    pub fn observe(
        &mut self,
        data: &PointCloud,
        source_id: &str,
        metadata: Option<&FxHashMap<String, String>>,
    ) -> ObservationResult {
        let started = Instant::now();

        // 1. Owned copy + pre-hash of its raw bytes.
        let snapshot = data.clone();
        let original_hash = attest::snapshot_digest(&snapshot);

        let outcome = self.run_pipeline(&snapshot, &original_hash, source_id, metadata);
        let execution_time_ms = started.elapsed().as_millis() as u64;

        let result = match outcome {
            Ok((annotation, invariants)) => {
                // 4. Commit the attestation to the chain; the new root is
                //    this result's lineage.
                let lineage = self.chain.extend(annotation.attestation_hash());
                ObservationResult::new(
                    annotation,
                    ObservationStatus::Completed,
                    invariants,
                    execution_time_ms,
                    lineage,
                )
            }
            Err(err) => {
                tracing::warn!(source_id, error = %err, "observation failed");
                self.failed_result(source_id, &err.to_string(), execution_time_ms)
            }
        };

        // 5. History append is paired with the chain append above; both
        //    belong to the same logical commit.
        self.history.push(result.clone());
        result
    }

    /// Steps 2-3 of the observation: homology plus the invariant suite.
    /// Any error here is a computation failure, handled by the caller.
    fn run_pipeline(
        &mut self,
        snapshot: &PointCloud,
        original_hash: &str,
        source_id: &str,
        metadata: Option<&FxHashMap<String, String>>,
    ) -> TopoResult<(TopologicalAnnotation, Vec<InvariantAssertion>)> {
        // 2. Delegate to the observer, merge caller metadata.
        let mut annotation = self.observer.observe(snapshot, source_id)?;
        if let Some(extra) = metadata {
            annotation.merge_metadata(extra);
        }

        // 3. Invariant suite, in declaration order.
        let mut invariants = Vec::new();
        if self.config.check_invariants {
            invariants.push(self.assert_trust_conserved());
            invariants.push(Self::assert_read_only(snapshot, original_hash));
            invariants.push(Self::assert_non_authoritative(&annotation));
            invariants.push(Self::assert_deterministic(&annotation));
            invariants.push(self.assert_provenance_preserved());
        }

        Ok((annotation, invariants))
    }

    fn assert_trust_conserved(&self) -> InvariantAssertion {
        let satisfied = self.trust_balance >= 0.0;
        let mut evidence = FxHashMap::default();
        evidence.insert("trust_balance".to_string(), self.trust_balance.to_string());
        InvariantAssertion::new(InvariantType::TrustConserved, satisfied, evidence)
    }

    fn assert_read_only(snapshot: &PointCloud, original_hash: &str) -> InvariantAssertion {
        let recomputed = attest::snapshot_digest(snapshot);
        let satisfied = recomputed == original_hash;
        let mut evidence = FxHashMap::default();
        evidence.insert("original_hash".to_string(), original_hash.to_string());
        evidence.insert("recomputed_hash".to_string(), recomputed);
        InvariantAssertion::new(InvariantType::ReadOnly, satisfied, evidence)
    }

    fn assert_non_authoritative(annotation: &TopologicalAnnotation) -> InvariantAssertion {
        let satisfied = !annotation.is_authoritative();
        let mut evidence = FxHashMap::default();
        evidence.insert(
            "is_authoritative".to_string(),
            annotation.is_authoritative().to_string(),
        );
        InvariantAssertion::new(InvariantType::NonAuthoritative, satisfied, evidence)
    }

    fn assert_deterministic(annotation: &TopologicalAnnotation) -> InvariantAssertion {
        // Satisfied by construction: the pipeline is a pure function of the
        // snapshot. Evidence is the attestation prefix.
        let prefix: String = annotation.attestation_hash().chars().take(16).collect();
        let mut evidence = FxHashMap::default();
        evidence.insert("attestation_prefix".to_string(), prefix);
        InvariantAssertion::new(InvariantType::Deterministic, true, evidence)
    }

    fn assert_provenance_preserved(&self) -> InvariantAssertion {
        let satisfied = !self.chain.is_empty();
        let mut evidence = FxHashMap::default();
        evidence.insert("chain_length".to_string(), self.chain.len().to_string());
        InvariantAssertion::new(InvariantType::ProvenancePreserved, satisfied, evidence)
    }

    /// A computation failure does not, by definition, violate trust
    /// conservation: the failed result carries a single satisfied
    /// TRUST_CONSERVED assertion and zero Betti numbers. The chain is not
    /// extended; the lineage is the root as of the failure.
    fn failed_result(
        &self,
        source_id: &str,
        message: &str,
        execution_time_ms: u64,
    ) -> ObservationResult {
        let mut annotation = TopologicalAnnotation::new(
            source_id,
            BettiNumbers::zeros(),
            PersistenceDiagram::new(self.config.max_dimension),
        );
        annotation.insert_metadata(FAILURE_KEY, message);

        let invariants = vec![self.assert_trust_conserved()];

        ObservationResult::new(
            annotation,
            ObservationStatus::Failed,
            invariants,
            execution_time_ms,
            self.chain.root().to_string(),
        )
    }

    // --- Read APIs ---

    pub fn merkle_root(&self) -> &str {
        self.chain.root()
    }

    pub fn merkle_chain_len(&self) -> usize {
        self.chain.len()
    }

    /// True iff `expected` equals the current Merkle root.
    pub fn verify_merkle_chain(&self, expected: &str) -> bool {
        self.chain.verify(expected)
    }

    pub fn observation_history(&self) -> &[ObservationResult] {
        &self.history
    }

    pub fn trust_balance(&self) -> f64 {
        self.trust_balance
    }

    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    /// Aggregate audit report over the full observation history.
    pub fn comprehensive_audit_report(&self) -> AuditReport {
        let observations: Vec<ObservationSummary> = self
            .history
            .iter()
            .map(ObservationSummary::from_result)
            .collect();

        let all_observations_valid = self.history.iter().all(|r| {
            r.status() == ObservationStatus::Completed && r.all_invariants_satisfied()
        });
        let trust_conserved_all = self.history.iter().all(|r| r.trust_conserved());

        AuditReport {
            layer_version: LAYER_VERSION.to_string(),
            total_observations: self.history.len(),
            trust_balance: self.trust_balance,
            trust_invariant_satisfied: self.trust_balance >= 0.0,
            all_observations_valid,
            trust_conserved_all,
            merkle_root: self.chain.root().to_string(),
            merkle_chain_length: self.chain.len(),
            observations,
            compliance_assertion: AuditReport::COMPLIANCE_ASSERTION.to_string(),
        }
    }
}
