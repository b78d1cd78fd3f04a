//! Error types.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use thiserror::Error;

/// Error taxonomy of the instrumentation layer.
///
/// Two families exist:
/// - Validation errors (`NegativeBetti`, the malformed-shape variants) fail
///   fast at construction boundaries, before any layer state changes.
/// - `Computation` / `CapacityExceeded` arise inside the homology pipeline
///   and are caught by the layer, which converts them into a FAILED
///   observation result instead of propagating them.
#[derive(Error, Debug)]
pub enum TopoError {
    /// A Betti number was constructed from a negative count.
    #[error("negative betti number: beta_{dimension} = {value}")]
    NegativeBetti { dimension: usize, value: i64 },

    /// A point-cloud row had a different arity than the first row.
    #[error("ragged point cloud: row {row} has {found} coordinates, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The point dimension must be at least 1.
    #[error("invalid point dimension: {0}")]
    InvalidDimension(usize),

    /// A flat coordinate buffer did not divide evenly into points.
    #[error("flat buffer of length {len} is not a multiple of dimension {dim}")]
    MisalignedBuffer { len: usize, dim: usize },

    /// NaN / infinite coordinates are rejected up front: they would make the
    /// edge filtration ordering ill-defined.
    #[error("non-finite coordinate at point {point}, axis {axis}")]
    NonFiniteCoordinate { point: usize, axis: usize },

    /// The homology engine was given more points than its configured budget.
    #[error("point cloud of {points} points exceeds engine budget of {budget}")]
    CapacityExceeded { points: usize, budget: usize },

    /// Generic failure inside the distance/filtration computation.
    #[error("homology computation failed: {0}")]
    Computation(String),
}

pub type TopoResult<T> = core::result::Result<T, TopoError>;
