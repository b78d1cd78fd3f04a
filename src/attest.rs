// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Attestation digests.
//!
//! Every digest is a BLAKE3 hash over a fixed field order with explicit
//! little-endian encodings and domain-separation tags, rendered as lowercase
//! hex. Wall-clock timestamps are never hashed: two layers fed an identical
//! observation sequence must produce identical digests.

use crate::dist::PointCloud;
use crate::types::{BettiNumbers, InvariantType};
use rustc_hash::FxHashMap;

const ANNOTATION_TAG: &[u8] = b"toposcope/annotation/v1";
const ASSERTION_TAG: &[u8] = b"toposcope/assertion/v1";
const SNAPSHOT_TAG: &[u8] = b"toposcope/snapshot/v1";
const CHAIN_SEED_TAG: &[u8] = b"toposcope/chain-seed/v1";
const CHAIN_LINK_TAG: &[u8] = b"toposcope/chain-link/v1";

fn finish_hex(hasher: blake3::Hasher) -> String {
    hasher.finalize().to_hex().to_string()
}

/// Digest of a point cloud's raw bytes (shape + coordinate bit patterns).
///
/// Used by the READ_ONLY invariant: the digest is taken before and after the
/// homology pipeline runs over the snapshot copy; any mutation shows up as a
/// mismatch.
pub fn snapshot_digest(cloud: &PointCloud) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(SNAPSHOT_TAG);
    hasher.update(&(cloud.len() as u64).to_le_bytes());
    hasher.update(&(cloud.dim() as u64).to_le_bytes());
    for value in cloud.raw() {
        hasher.update(&value.to_bits().to_le_bytes());
    }
    finish_hex(hasher)
}

/// Annotation attestation: (kind tag, source id, Betti counts, interval
/// count). Metadata is deliberately excluded so merging caller metadata
/// after construction cannot alter the attested content.
pub fn annotation_digest(source_id: &str, betti: &BettiNumbers, interval_count: usize) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(ANNOTATION_TAG);
    hasher.update(source_id.as_bytes());
    hasher.update(&betti.beta_0.to_le_bytes());
    hasher.update(&betti.beta_1.to_le_bytes());
    hasher.update(&betti.beta_2.to_le_bytes());
    hasher.update(&(interval_count as u64).to_le_bytes());
    finish_hex(hasher)
}

/// Assertion attestation: (kind tag, invariant name, outcome, evidence in
/// sorted key order).
pub fn assertion_digest(
    invariant: InvariantType,
    satisfied: bool,
    evidence: &FxHashMap<String, String>,
) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(ASSERTION_TAG);
    hasher.update(invariant.as_str().as_bytes());
    hasher.update(&[satisfied as u8]);

    // Hash maps iterate in arbitrary order; canonicalize by key.
    let mut keys: Vec<&String> = evidence.keys().collect();
    keys.sort();
    for key in keys {
        hasher.update(key.as_bytes());
        hasher.update(&[0]);
        hasher.update(evidence[key].as_bytes());
        hasher.update(&[0]);
    }
    finish_hex(hasher)
}

/// First entry of a Merkle chain, committing to the session seed.
pub fn chain_seed_digest(seed: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(CHAIN_SEED_TAG);
    hasher.update(seed.as_bytes());
    finish_hex(hasher)
}

/// Next chain entry: hash(previous_root || attestation_hash).
pub fn chain_link_digest(previous_root: &str, attestation_hash: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(CHAIN_LINK_TAG);
    hasher.update(previous_root.as_bytes());
    hasher.update(attestation_hash.as_bytes());
    finish_hex(hasher)
}
