//! The graph capability the search consumes, plus a CSR adapter.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::weight::Weight;

/// Dense vertex identifier in `[0, vertex_count())`.
pub type VertexKey = usize;

/// What the search needs from a graph.
///
/// `outgoing_edges` fills a caller-owned scratch buffer rather than returning
/// an iterator so the trait stays object safe. The order in which edges are
/// pushed must be stable for the lifetime of a search; it decides ties.
pub trait Graph {
    type Edge: Copy + fmt::Debug;
    type Weight: Weight;

    fn vertex_count(&self) -> usize;
    fn outgoing_edges(&self, vertex: VertexKey, out: &mut Vec<Self::Edge>);
    fn source(&self, edge: Self::Edge) -> VertexKey;
    fn target(&self, edge: Self::Edge) -> VertexKey;
    fn weight(&self, edge: Self::Edge) -> Self::Weight;

    #[inline]
    fn contains_vertex(&self, vertex: VertexKey) -> bool { vertex < self.vertex_count() }
}

impl<G: Graph + ?Sized> Graph for &G {
    type Edge = G::Edge;
    type Weight = G::Weight;

    #[inline] fn vertex_count(&self) -> usize { (**self).vertex_count() }
    #[inline] fn outgoing_edges(&self, vertex: VertexKey, out: &mut Vec<Self::Edge>) { (**self).outgoing_edges(vertex, out) }
    #[inline] fn source(&self, edge: Self::Edge) -> VertexKey { (**self).source(edge) }
    #[inline] fn target(&self, edge: Self::Edge) -> VertexKey { (**self).target(edge) }
    #[inline] fn weight(&self, edge: Self::Edge) -> Self::Weight { (**self).weight(edge) }
}

// ---------------- CSR adapter ----------------

/// Index of an edge in the CSR `targets`/`weights` arrays.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

impl EdgeId {
    #[inline]
    pub fn index(self) -> usize { self.0 as usize }
}

/// Compressed sparse row graph: the out-edges of `u` are
/// `offsets[u]..offsets[u + 1]` in `targets` and `weights`.
#[derive(Clone, Debug)]
pub struct CsrGraph<W> {
    offsets: Vec<u32>,
    targets: Vec<u32>,
    weights: Vec<W>,
    // source of every edge; CSR only stores it implicitly
    sources: Vec<u32>,
}

impl<W: Weight> CsrGraph<W> {
    pub fn from_csr(offsets: Vec<u32>, targets: Vec<u32>, weights: Vec<W>) -> Result<Self, GraphError> {
        let n = match offsets.len().checked_sub(1) {
            Some(n) => n,
            None => return Err(GraphError::MissingOffsets),
        };
        if offsets[0] != 0 {
            return Err(GraphError::OffsetsStart(offsets[0]));
        }
        if let Some(pos) = offsets.windows(2).position(|w| w[0] > w[1]) {
            return Err(GraphError::OffsetsNotMonotone { vertex: pos });
        }
        let m = offsets[n] as usize;
        if targets.len() != m || weights.len() != m {
            return Err(GraphError::EdgeArrayLength { expected: m, targets: targets.len(), weights: weights.len() });
        }
        if let Some(edge) = targets.iter().position(|&t| t as usize >= n) {
            return Err(GraphError::TargetOutOfRange { edge, target: targets[edge], vertex_count: n });
        }
        let mut sources = Vec::with_capacity(m);
        for u in 0..n {
            let deg = (offsets[u + 1] - offsets[u]) as usize;
            sources.extend(core::iter::repeat(u as u32).take(deg));
        }
        Ok(Self { offsets, targets, weights, sources })
    }

    /// Builds the CSR arrays from an edge list. Edges of one source keep their
    /// relative input order.
    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32, W)]) -> Result<Self, GraphError> {
        if vertex_count > u32::MAX as usize {
            return Err(GraphError::TooManyVertices(vertex_count));
        }
        if edges.len() > u32::MAX as usize {
            return Err(GraphError::TooManyEdges(edges.len()));
        }
        if let Some(edge) = edges.iter().position(|&(u, _, _)| u as usize >= vertex_count) {
            return Err(GraphError::SourceOutOfRange { edge, tail: edges[edge].0, vertex_count });
        }
        let mut order: Vec<usize> = (0..edges.len()).collect();
        order.sort_by_key(|&i| edges[i].0);
        let mut offsets = vec![0u32; vertex_count + 1];
        for &(u, _, _) in edges {
            offsets[u as usize + 1] += 1;
        }
        for u in 0..vertex_count {
            offsets[u + 1] += offsets[u];
        }
        let targets = order.iter().map(|&i| edges[i].1).collect();
        let weights = order.iter().map(|&i| edges[i].2).collect();
        Self::from_csr(offsets, targets, weights)
    }

    #[inline]
    pub fn edge_count(&self) -> usize { self.targets.len() }

    pub fn offsets(&self) -> &[u32] { &self.offsets }
    pub fn targets(&self) -> &[u32] { &self.targets }
    pub fn weights(&self) -> &[W] { &self.weights }
}

impl<W: Weight> Graph for CsrGraph<W> {
    type Edge = EdgeId;
    type Weight = W;

    #[inline]
    fn vertex_count(&self) -> usize { self.offsets.len() - 1 }

    fn outgoing_edges(&self, vertex: VertexKey, out: &mut Vec<EdgeId>) {
        let start = self.offsets[vertex];
        let end = self.offsets[vertex + 1];
        out.extend((start..end).map(EdgeId));
    }

    #[inline] fn source(&self, edge: EdgeId) -> VertexKey { self.sources[edge.index()] as usize }
    #[inline] fn target(&self, edge: EdgeId) -> VertexKey { self.targets[edge.index()] as usize }
    #[inline] fn weight(&self, edge: EdgeId) -> W { self.weights[edge.index()] }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_groups_by_source_and_keeps_order() {
        let g = CsrGraph::from_edges(3, &[(1, 2, 5u32), (0, 2, 3), (0, 1, 1)]).unwrap();
        assert_eq!(g.offsets(), &[0, 2, 3, 3]);
        assert_eq!(g.targets(), &[2, 1, 2]);
        let mut out = Vec::new();
        g.outgoing_edges(0, &mut out);
        assert_eq!(out, vec![EdgeId(0), EdgeId(1)]);
        assert_eq!(g.source(EdgeId(2)), 1);
        assert_eq!(g.weight(EdgeId(2)), 5);
    }

    #[test]
    fn rejects_malformed_arrays() {
        assert_eq!(CsrGraph::<u32>::from_csr(vec![], vec![], vec![]).unwrap_err(), GraphError::MissingOffsets);
        assert!(matches!(
            CsrGraph::from_csr(vec![0, 2, 1], vec![1, 0], vec![1u32, 1]),
            Err(GraphError::OffsetsNotMonotone { vertex: 1 })
        ));
        assert!(matches!(
            CsrGraph::from_csr(vec![0, 1], vec![4], vec![1u32]),
            Err(GraphError::TargetOutOfRange { edge: 0, target: 4, .. })
        ));
        assert!(matches!(
            CsrGraph::from_edges(2, &[(2, 0, 1u32)]),
            Err(GraphError::SourceOutOfRange { edge: 0, .. })
        ));
    }

    #[test]
    fn empty_vertex_set_is_allowed() {
        let g = CsrGraph::<u32>::from_csr(vec![0], vec![], vec![]).unwrap();
        assert_eq!(g.vertex_count(), 0);
        assert!(!g.contains_vertex(0));
    }
}
