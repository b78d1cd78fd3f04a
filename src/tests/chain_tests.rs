// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::chain::MerkleChain;

#[test]
fn test_seeded_chain_is_never_empty() {
    let chain = MerkleChain::new("genesis");
    assert_eq!(chain.len(), 1);
    assert!(!chain.is_empty());
    assert_eq!(chain.root(), chain.entries()[0]);
}

#[test]
fn test_extend_changes_root_and_commits_to_prior() {
    let mut chain = MerkleChain::new("genesis");
    let seed_root = chain.root().to_string();

    let root_1 = chain.extend("attestation-a");
    assert_ne!(root_1, seed_root);
    assert_eq!(chain.root(), root_1);
    assert_eq!(chain.len(), 2);

    let root_2 = chain.extend("attestation-b");
    assert_ne!(root_2, root_1);
    assert_eq!(chain.len(), 3);
    // Every prior entry is still present.
    assert_eq!(chain.entries()[0], seed_root);
    assert_eq!(chain.entries()[1], root_1);
}

#[test]
fn test_identical_sequences_produce_identical_roots() {
    let mut a = MerkleChain::new("genesis");
    let mut b = MerkleChain::new("genesis");

    for attestation in ["x", "y", "z"] {
        a.extend(attestation);
        b.extend(attestation);
    }
    assert_eq!(a.root(), b.root());
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = MerkleChain::new("genesis");
    let mut b = MerkleChain::new("other-session");
    a.extend("x");
    b.extend("x");
    assert_ne!(a.root(), b.root());
}

#[test]
fn test_order_matters() {
    let mut a = MerkleChain::new("genesis");
    let mut b = MerkleChain::new("genesis");
    a.extend("x");
    a.extend("y");
    b.extend("y");
    b.extend("x");
    assert_ne!(a.root(), b.root());
}

#[test]
fn test_verify_matches_current_root_only() {
    let mut chain = MerkleChain::new("genesis");
    let old_root = chain.root().to_string();
    chain.extend("x");

    assert!(chain.verify(chain.root()));
    assert!(!chain.verify(&old_root));
    assert!(!chain.verify("deadbeef"));
}
