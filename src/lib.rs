// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! toposcope-kernel: a read-only topological instrumentation layer.
//!
//! Computes persistent-homology summaries (Betti numbers) over snapshots of
//! numeric data and packages them into cryptographically attested,
//! non-authoritative annotations. The layer is a diagnostic side channel:
//! it never mutates the data it observes and its output carries no authority
//! over the system that produced the data. Every completed observation is
//! committed to an append-only Merkle hash chain for tamper-evident audit.

pub mod config;
pub mod error;
pub mod types;
pub mod dist;
pub mod filtration;
pub mod diagram;
pub mod attest;
pub mod chain;
pub mod annotation;
pub mod assertion;
pub mod observer;
pub mod layer;
pub mod report;

#[cfg(test)]
pub mod tests;
