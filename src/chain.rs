// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Append-only Merkle hash chain.
//!
//! Each entry commits to every prior entry: entry k+1 is
//! `hash(entry_k || attestation)`. The chain is seeded at construction, so
//! it is never empty and the PROVENANCE_PRESERVED invariant holds from the
//! first observation. No truncation or rewriting is possible through this
//! interface.

use crate::attest;

#[derive(Debug, Clone)]
pub struct MerkleChain {
    entries: Vec<String>,
}

impl MerkleChain {
    /// New chain whose first entry commits to the session seed.
    pub fn new(seed: &str) -> Self {
        Self {
            entries: vec![attest::chain_seed_digest(seed)],
        }
    }

    /// Appends `hash(root || attestation_hash)` and returns the new root.
    pub fn extend(&mut self, attestation_hash: &str) -> String {
        let next = attest::chain_link_digest(self.root(), attestation_hash);
        self.entries.push(next.clone());
        next
    }

    /// The current root: the most recent entry.
    pub fn root(&self) -> &str {
        // Seeded at construction; entries is never empty.
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// True iff `expected` equals the current root.
    pub fn verify(&self, expected: &str) -> bool {
        self.root() == expected
    }
}
