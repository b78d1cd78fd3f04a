// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Non-authoritative topological annotations.

use crate::attest;
use crate::diagram::PersistenceDiagram;
use crate::types::BettiNumbers;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// The attested output of one observation.
///
/// Authority is denied structurally: there is no `authoritative` field to
/// flip, only a zero-argument accessor that returns the literal `false`.
/// Neither the constructing code nor any caller can produce an authoritative
/// annotation.
#[derive(Debug, Clone, Serialize)]
pub struct TopologicalAnnotation {
    source_id: String,
    betti: BettiNumbers,
    diagram: PersistenceDiagram,
    metadata: FxHashMap<String, String>,
    attestation_hash: String,
}

impl TopologicalAnnotation {
    pub fn new(
        source_id: impl Into<String>,
        betti: BettiNumbers,
        diagram: PersistenceDiagram,
    ) -> Self {
        let source_id = source_id.into();
        let attestation_hash = attest::annotation_digest(&source_id, &betti, diagram.len());
        Self {
            source_id,
            betti,
            diagram,
            metadata: FxHashMap::default(),
            attestation_hash,
        }
    }

    /// Always `false`. This annotation may inform an auditor; it can never
    /// override the system it describes.
    pub fn is_authoritative(&self) -> bool {
        false
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn betti(&self) -> &BettiNumbers {
        &self.betti
    }

    pub fn diagram(&self) -> &PersistenceDiagram {
        &self.diagram
    }

    pub fn metadata(&self) -> &FxHashMap<String, String> {
        &self.metadata
    }

    /// The attestation covers (source, Betti counts, interval count) only,
    /// so metadata edits do not invalidate it.
    pub fn attestation_hash(&self) -> &str {
        &self.attestation_hash
    }

    pub fn insert_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    /// Merge caller-supplied metadata into the annotation.
    pub fn merge_metadata(&mut self, extra: &FxHashMap<String, String>) {
        for (key, value) in extra {
            self.metadata.insert(key.clone(), value.clone());
        }
    }
}
