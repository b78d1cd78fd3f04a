// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Value types of the instrumentation layer.

pub mod interval;
pub mod betti;
pub mod enums;

pub use betti::BettiNumbers;
pub use enums::{InvariantType, ObservationStatus};
pub use interval::PersistenceInterval;

use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock timestamp in milliseconds since the Unix epoch.
///
/// Timestamps are carried on value types for the audit report only; they are
/// never fed into attestation digests, so identical observation sequences
/// hash identically across runs.
pub(crate) fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
