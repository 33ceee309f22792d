//! Labels: "vertex `v` reached at cost `c` via edge `e`".

use core::cmp::Ordering;

use serde::Serialize;

use crate::graph::VertexKey;
use crate::weight::Weight;

/// Immutable search state at one vertex. The seed label at the source has no
/// origin edge; every other label remembers the edge it arrived by, which is
/// all the tracer needs to find its predecessor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Label<W, E> {
    vertex: VertexKey,
    cost: W,
    origin: Option<E>,
}

impl<W: Weight, E: Copy> Label<W, E> {
    pub fn new(vertex: VertexKey, cost: W, origin: E) -> Self { Self { vertex, cost, origin: Some(origin) } }

    /// Zero-cost label a search starts from.
    pub fn seed(vertex: VertexKey) -> Self { Self { vertex, cost: W::zero(), origin: None } }

    #[inline] pub fn vertex(&self) -> VertexKey { self.vertex }
    #[inline] pub fn cost(&self) -> W { self.cost }
    #[inline] pub fn origin(&self) -> Option<E> { self.origin }
    #[inline] pub fn is_seed(&self) -> bool { self.origin.is_none() }

    /// Cost order. Labels at different vertices may compare equal; the
    /// stores break those ties by arrival order.
    #[inline]
    pub fn cmp_cost(&self, other: &Self) -> Ordering { self.cost.cmp(&other.cost) }

    /// Dominance for a single scalar cost: `self` makes `other` redundant.
    #[inline]
    pub fn is_no_worse_than(&self, other: &Self) -> bool { self.cost <= other.cost }
}
