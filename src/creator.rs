//! Label creation: extend a settled label across one outgoing edge.

use crate::error::Infeasible;
use crate::graph::Graph;
use crate::label::Label;
use crate::weight::Weight;

pub type GraphLabel<G> = Label<<G as Graph>::Weight, <G as Graph>::Edge>;

/// Produces the successor of `predecessor` across `edge`, or says why it
/// cannot exist. Implementations must not have side effects; the search may
/// call them in any order.
pub trait LabelCreator<G: Graph + ?Sized> {
    fn create(&self, graph: &G, predecessor: &GraphLabel<G>, edge: G::Edge) -> Result<GraphLabel<G>, Infeasible<G::Weight>>;
}

impl<G: Graph + ?Sized, C: LabelCreator<G> + ?Sized> LabelCreator<G> for Box<C> {
    #[inline]
    fn create(&self, graph: &G, predecessor: &GraphLabel<G>, edge: G::Edge) -> Result<GraphLabel<G>, Infeasible<G::Weight>> {
        (**self).create(graph, predecessor, edge)
    }
}

impl<G: Graph + ?Sized, C: LabelCreator<G> + ?Sized> LabelCreator<G> for &C {
    #[inline]
    fn create(&self, graph: &G, predecessor: &GraphLabel<G>, edge: G::Edge) -> Result<GraphLabel<G>, Infeasible<G::Weight>> {
        (**self).create(graph, predecessor, edge)
    }
}

/// Cost addition. Only fails when the sum overflows `G::Weight`.
#[derive(Copy, Clone, Debug, Default)]
pub struct StandardLabelCreator;

impl<G: Graph + ?Sized> LabelCreator<G> for StandardLabelCreator {
    #[inline]
    fn create(&self, graph: &G, predecessor: &GraphLabel<G>, edge: G::Edge) -> Result<GraphLabel<G>, Infeasible<G::Weight>> {
        debug_assert_eq!(graph.source(edge), predecessor.vertex(), "edge does not leave the predecessor's vertex");
        let cost = predecessor.cost().checked_add(graph.weight(edge)).ok_or(Infeasible::Overflow)?;
        Ok(Label::new(graph.target(edge), cost, edge))
    }
}

/// Rejects any successor whose cost goes over `max_cost`. A cost equal to the
/// ceiling is still feasible.
#[derive(Copy, Clone, Debug)]
pub struct ConstrainedLabelCreator<C, W> {
    inner: C,
    max_cost: W,
}

impl<C, W: Weight> ConstrainedLabelCreator<C, W> {
    pub fn new(inner: C, max_cost: W) -> Self { Self { inner, max_cost } }

    pub fn max_cost(&self) -> W { self.max_cost }
}

impl<W: Weight> ConstrainedLabelCreator<StandardLabelCreator, W> {
    pub fn standard(max_cost: W) -> Self { Self::new(StandardLabelCreator, max_cost) }
}

impl<G, C> LabelCreator<G> for ConstrainedLabelCreator<C, G::Weight>
where
    G: Graph + ?Sized,
    C: LabelCreator<G>,
{
    fn create(&self, graph: &G, predecessor: &GraphLabel<G>, edge: G::Edge) -> Result<GraphLabel<G>, Infeasible<G::Weight>> {
        let candidate = self.inner.create(graph, predecessor, edge)?;
        if candidate.cost() > self.max_cost {
            return Err(Infeasible::ExceedsCeiling { cost: candidate.cost(), max_cost: self.max_cost });
        }
        Ok(candidate)
    }
}
