// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Point clouds and Euclidean distance matrices.

use crate::error::{TopoError, TopoResult};

/// An owned point set: `n` points in `dim`-dimensional space, stored flat
/// in row-major order.
///
/// Shape and finiteness are validated at construction, so every downstream
/// stage can assume a well-formed cloud. Cloning a `PointCloud` is the
/// snapshot-copy step of the observation pipeline: the clone shares no
/// storage with the caller's buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    data: Vec<f64>,
    n: usize,
    dim: usize,
}

impl PointCloud {
    /// Build from explicit rows. Fails fast on ragged input.
    pub fn from_rows(rows: &[Vec<f64>]) -> TopoResult<Self> {
        if rows.is_empty() {
            return Ok(Self {
                data: Vec::new(),
                n: 0,
                dim: 0,
            });
        }
        let dim = rows[0].len();
        if dim == 0 {
            return Err(TopoError::InvalidDimension(0));
        }
        let mut data = Vec::with_capacity(rows.len() * dim);
        for (row, point) in rows.iter().enumerate() {
            if point.len() != dim {
                return Err(TopoError::RaggedRow {
                    row,
                    expected: dim,
                    found: point.len(),
                });
            }
            data.extend_from_slice(point);
        }
        Self::from_flat(data, dim)
    }

    /// Build from a flat row-major buffer with a declared dimension.
    pub fn from_flat(data: Vec<f64>, dim: usize) -> TopoResult<Self> {
        if dim == 0 {
            return Err(TopoError::InvalidDimension(0));
        }
        if data.len() % dim != 0 {
            return Err(TopoError::MisalignedBuffer {
                len: data.len(),
                dim,
            });
        }
        for (idx, value) in data.iter().enumerate() {
            if !value.is_finite() {
                return Err(TopoError::NonFiniteCoordinate {
                    point: idx / dim,
                    axis: idx % dim,
                });
            }
        }
        let n = data.len() / dim;
        Ok(Self { data, n, dim })
    }

    /// A 1-D series is treated as an (n, 1) point set.
    pub fn from_series(values: &[f64]) -> TopoResult<Self> {
        if values.is_empty() {
            return Ok(Self {
                data: Vec::new(),
                n: 0,
                dim: 0,
            });
        }
        Self::from_flat(values.to_vec(), 1)
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Coordinates of point `i`.
    pub fn point(&self, i: usize) -> &[f64] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    /// Flat coordinate buffer, row-major.
    pub fn raw(&self) -> &[f64] {
        &self.data
    }
}

/// Symmetric n x n matrix of pairwise Euclidean distances, zero diagonal.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    n: usize,
}

impl DistanceMatrix {
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }
}

/// Euclidean distance between two points of equal dimension.
///
/// No branches inside the loop; LLVM vectorizes the accumulation.
#[inline(always)]
fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "point dimension mismatch");

    let mut sum = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let diff = x - y;
        sum += diff * diff;
    }
    sum.sqrt()
}

/// Computes the full pairwise distance matrix. Pure function: O(n^2) time,
/// O(n^2) space, no failure modes (shape was validated at cloud
/// construction).
pub fn distance_matrix(cloud: &PointCloud) -> DistanceMatrix {
    let n = cloud.len();
    let mut data = vec![0.0f64; n * n];

    for i in 0..n {
        for j in (i + 1)..n {
            let d = euclidean(cloud.point(i), cloud.point(j));
            data[i * n + j] = d;
            data[j * n + i] = d;
        }
    }

    DistanceMatrix { data, n }
}
