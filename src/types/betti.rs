// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::{TopoError, TopoResult};
use crate::types::unix_millis;
use serde::{Deserialize, Serialize};

/// Betti numbers of a complex at one filtration threshold.
///
/// beta_0 counts connected components, beta_1 loops, beta_2 voids.
/// Construction validates non-negativity of the raw counts; the fields are
/// unsigned afterwards, so the invariant cannot be violated post hoc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettiNumbers {
    pub beta_0: u32,
    pub beta_1: u32,
    pub beta_2: u32,
    /// When this summary was computed (report metadata only, never hashed).
    pub timestamp_ms: u64,
}

impl BettiNumbers {
    /// Validating constructor. Negative input is a validation error and
    /// fails fast, before the value can enter any annotation.
    pub fn new(beta_0: i64, beta_1: i64, beta_2: i64) -> TopoResult<Self> {
        for (dimension, value) in [(0usize, beta_0), (1, beta_1), (2, beta_2)] {
            if value < 0 {
                return Err(TopoError::NegativeBetti { dimension, value });
            }
        }
        Ok(Self {
            beta_0: beta_0 as u32,
            beta_1: beta_1 as u32,
            beta_2: beta_2 as u32,
            timestamp_ms: unix_millis(),
        })
    }

    /// The all-zero summary used for failed observations.
    pub fn zeros() -> Self {
        Self {
            beta_0: 0,
            beta_1: 0,
            beta_2: 0,
            timestamp_ms: unix_millis(),
        }
    }

    /// Euler characteristic: beta_0 - beta_1 + beta_2.
    pub fn euler_characteristic(&self) -> i64 {
        self.beta_0 as i64 - self.beta_1 as i64 + self.beta_2 as i64
    }

    /// Total feature count across all three dimensions.
    pub fn total_features(&self) -> u64 {
        self.beta_0 as u64 + self.beta_1 as u64 + self.beta_2 as u64
    }
}
