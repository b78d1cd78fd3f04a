// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Vietoris-Rips edge filtration and Union-Find homology.
//!
//! Dimension 0 is exact: processing edges in ascending distance order with a
//! disjoint-set structure yields the component merge tree, hence the H0
//! persistence intervals. Dimensions 1 and 2 are documented heuristics, not
//! matrix-reduction homology; an exact engine can replace them behind the
//! same diagram-producing interface.

use crate::diagram::PersistenceDiagram;
use crate::dist::DistanceMatrix;
use crate::error::{TopoError, TopoResult};
use crate::types::PersistenceInterval;

/// Disjoint-set forest with path compression and union by rank.
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Root of `x`, compressing the path on the way up.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merges the components of `a` and `b`. Returns `true` if they were
    /// previously distinct.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            core::cmp::Ordering::Less => self.parent[ra] = rb,
            core::cmp::Ordering::Greater => self.parent[rb] = ra,
            core::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }

    /// Number of distinct components.
    pub fn component_count(&mut self) -> usize {
        let n = self.parent.len();
        let mut count = 0;
        for i in 0..n {
            if self.find(i) == i {
                count += 1;
            }
        }
        count
    }
}

/// One edge of the Rips filtration.
#[derive(Debug, Clone, Copy)]
struct FiltrationEdge {
    i: usize,
    j: usize,
    distance: f64,
}

/// Turns a distance matrix into a persistence diagram.
pub struct HomologyEngine {
    max_dimension: usize,
    max_edge_length: f64,
    point_budget: Option<usize>,
}

impl HomologyEngine {
    pub fn new(max_dimension: usize) -> Self {
        Self {
            max_dimension,
            max_edge_length: f64::INFINITY,
            point_budget: None,
        }
    }

    /// Restrict the filtration to edges no longer than `max_edge_length`.
    pub fn with_max_edge_length(mut self, max_edge_length: f64) -> Self {
        self.max_edge_length = max_edge_length;
        self
    }

    /// Cap the number of points the engine will accept. Exceeding the cap is
    /// a computation failure, reported, never propagated past the layer.
    pub fn with_point_budget(mut self, budget: Option<usize>) -> Self {
        self.point_budget = budget;
        self
    }

    pub fn max_dimension(&self) -> usize {
        self.max_dimension
    }

    /// Computes the persistence diagram of the Rips filtration over
    /// `distances`. Deterministic: identical inputs yield an identical
    /// interval sequence.
    pub fn compute(&self, distances: &DistanceMatrix) -> TopoResult<PersistenceDiagram> {
        let n = distances.len();
        if let Some(budget) = self.point_budget {
            if n > budget {
                return Err(TopoError::CapacityExceeded { points: n, budget });
            }
        }

        let mut diagram = PersistenceDiagram::new(self.max_dimension);
        if n == 0 {
            return Ok(diagram);
        }

        // 1. Enumerate admissible edges, ascending by distance; ties broken
        //    by (i, j) lexicographically so the merge order is total.
        let edges = self.collect_edges(distances);

        // 2. Exact H0 via Union-Find: one finite interval per merge.
        let mut uf = UnionFind::new(n);
        for edge in &edges {
            if uf.union(edge.i, edge.j) {
                diagram.push(PersistenceInterval::new(0.0, edge.distance, 0));
            }
        }

        // 3. Surviving components are essential classes. Total H0 intervals
        //    always equal the point count.
        let components = uf.component_count();
        for _ in 0..components {
            diagram.push(PersistenceInterval::new(0.0, f64::INFINITY, 0));
        }

        // 4. Heuristic H1: cycle count estimated from the edge surplus over
        //    a spanning forest, born/dying at fixed edge-length percentiles.
        if self.max_dimension >= 1 && n >= 3 {
            let excess = edges.len().saturating_sub(n - 1);
            let cycle_count = (excess / 3).min(n / 4);
            if cycle_count > 0 {
                let birth = percentile(&edges, 1, 3);
                let death = percentile(&edges, 2, 3);
                for _ in 0..cycle_count {
                    diagram.push(PersistenceInterval::new(birth, death, 1));
                }
            }
        }

        // 5. Heuristic H2: one essential void per 50 points, born at the
        //    median edge length.
        if self.max_dimension >= 2 && n >= 4 {
            let void_count = n / 50;
            if void_count > 0 {
                let birth = percentile(&edges, 1, 2);
                for _ in 0..void_count {
                    diagram.push(PersistenceInterval::new(birth, f64::INFINITY, 2));
                }
            }
        }

        tracing::debug!(
            points = n,
            edges = edges.len(),
            components,
            intervals = diagram.len(),
            "rips filtration complete"
        );

        Ok(diagram)
    }

    fn collect_edges(&self, distances: &DistanceMatrix) -> Vec<FiltrationEdge> {
        let n = distances.len();
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let distance = distances.get(i, j);
                if distance <= self.max_edge_length {
                    edges.push(FiltrationEdge { i, j, distance });
                }
            }
        }
        edges.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.i.cmp(&b.i))
                .then(a.j.cmp(&b.j))
        });
        edges
    }
}

/// Edge length at the num/den percentile of the sorted edge list, or
/// +infinity when no edges exist.
fn percentile(sorted_edges: &[FiltrationEdge], num: usize, den: usize) -> f64 {
    if sorted_edges.is_empty() {
        return f64::INFINITY;
    }
    let idx = (sorted_edges.len() * num / den).min(sorted_edges.len() - 1);
    sorted_edges[idx].distance
}
