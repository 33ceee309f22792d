//! Settled labels. Each vertex is written at most once and never changed,
//! which is what lets the tracer walk the store again after a search.

use crate::graph::VertexKey;
use crate::label::Label;
use crate::weight::Weight;

#[derive(Clone, Debug)]
pub struct PermanentStore<W, E> {
    labels: Vec<Option<Label<W, E>>>,
    settled: usize,
}

impl<W: Weight, E: Copy> PermanentStore<W, E> {
    pub fn new(vertex_count: usize) -> Self { Self { labels: vec![None; vertex_count], settled: 0 } }

    #[inline] pub fn capacity(&self) -> usize { self.labels.len() }
    #[inline] pub fn settled_count(&self) -> usize { self.settled }
    #[inline] pub fn has_settled(&self, vertex: VertexKey) -> bool { self.get(vertex).is_some() }

    pub fn get(&self, vertex: VertexKey) -> Option<&Label<W, E>> { self.labels.get(vertex)?.as_ref() }

    pub fn cost(&self, vertex: VertexKey) -> Option<W> { self.get(vertex).map(Label::cost) }

    /// Stores `label` as final for its vertex and returns the stored copy.
    ///
    /// # Panics
    /// If the vertex was already settled.
    pub fn settle(&mut self, label: Label<W, E>) -> &Label<W, E> {
        let v = label.vertex();
        assert!(self.labels[v].is_none(), "vertex {v} settled twice");
        self.settled += 1;
        self.labels[v].insert(label)
    }

    /// A settled label for the candidate's vertex that is at least as cheap.
    /// With non-negative weights any settled entry qualifies; the cost check
    /// keeps the relation honest for hand-built stores.
    pub fn dominates_or_equal(&self, candidate: &Label<W, E>) -> bool {
        self.get(candidate.vertex()).is_some_and(|l| l.is_no_worse_than(candidate))
    }

    /// Settled labels in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = &Label<W, E>> + '_ { self.labels.iter().flatten() }
}
