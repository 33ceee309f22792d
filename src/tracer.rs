//! Path reconstruction from the permanent store.
//!
//! Labels only remember the edge they arrived by, so the path is recovered
//! backward: from the target label, look up the settled label at the edge's
//! source, and repeat until the source vertex is reached. Every step re-checks
//! `predecessor.cost + weight(edge) == label.cost`.

use crate::error::TraceError;
use crate::graph::{Graph, VertexKey};
use crate::label::Label;
use crate::permanent::PermanentStore;
use crate::weight::Weight;

type Store<G> = PermanentStore<<G as Graph>::Weight, <G as Graph>::Edge>;

pub struct Tracer<'a, G: Graph + ?Sized> {
    graph: &'a G,
    store: &'a Store<G>,
}

impl<'a, G: Graph + ?Sized> Tracer<'a, G> {
    pub fn new(graph: &'a G, store: &'a Store<G>) -> Self { Self { graph, store } }

    /// Lazy backward walk: yields edges from the target toward the source.
    pub fn path_iter(&self, target: VertexKey, source: VertexKey) -> Result<PathIter<'a, G>, TraceError> {
        let start = self.store.get(target).ok_or(TraceError::NotSettled(target))?;
        Ok(PathIter { graph: self.graph, store: self.store, current: Some(start), source, steps: 0 })
    }

    /// Edges of the path in travel order, source first.
    pub fn try_reconstruct(&self, target: VertexKey, source: VertexKey) -> Result<Vec<G::Edge>, TraceError> {
        let mut path = self.path_iter(target, source)?.collect::<Result<Vec<_>, _>>()?;
        path.reverse();
        Ok(path)
    }

    /// Like [`Tracer::try_reconstruct`], for stores the search itself built.
    ///
    /// # Panics
    /// On any [`TraceError`]: a search-built store that fails to trace means
    /// an invariant was broken.
    pub fn reconstruct(&self, target: VertexKey, source: VertexKey) -> Vec<G::Edge> {
        match self.try_reconstruct(target, source) {
            Ok(path) => path,
            Err(err) => panic!("path reconstruction failed: {err}"),
        }
    }
}

/// Single pass over a path, target to source. After the first error it
/// yields nothing more; call [`Tracer::path_iter`] again to restart.
pub struct PathIter<'a, G: Graph + ?Sized> {
    graph: &'a G,
    store: &'a Store<G>,
    current: Option<&'a Label<G::Weight, G::Edge>>,
    source: VertexKey,
    steps: usize,
}

impl<'a, G: Graph + ?Sized> PathIter<'a, G> {
    fn step(&mut self, label: &'a Label<G::Weight, G::Edge>) -> Result<Option<G::Edge>, TraceError> {
        let vertex = label.vertex();
        if vertex == self.source {
            return Ok(None);
        }
        self.steps += 1;
        if self.steps > self.store.capacity() {
            return Err(TraceError::Cycle { vertex });
        }
        let edge = label.origin().ok_or(TraceError::SeedBeforeSource { reached: vertex, expected: self.source })?;
        let edge_target = self.graph.target(edge);
        if edge_target != vertex {
            return Err(TraceError::EdgeTargetMismatch { vertex, edge_target });
        }
        let predecessor = self.graph.source(edge);
        let prev = self.store.get(predecessor).ok_or(TraceError::MissingPredecessor { vertex, predecessor })?;
        let edge_weight = self.graph.weight(edge);
        if prev.cost().checked_add(edge_weight) != Some(label.cost()) {
            return Err(TraceError::AdditivityMismatch {
                vertex,
                predecessor,
                predecessor_cost: format!("{:?}", prev.cost()),
                edge_weight: format!("{edge_weight:?}"),
                cost: format!("{:?}", label.cost()),
            });
        }
        self.current = Some(prev);
        Ok(Some(edge))
    }
}

impl<'a, G: Graph + ?Sized> Iterator for PathIter<'a, G> {
    type Item = Result<G::Edge, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        let label = self.current.take()?;
        match self.step(label) {
            Ok(edge) => edge.map(Ok),
            Err(err) => Some(Err(err)),
        }
    }
}

impl<'a, G: Graph + ?Sized> core::iter::FusedIterator for PathIter<'a, G> {}
