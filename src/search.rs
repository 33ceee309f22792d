//! The label-setting driver.
//!
//! Each vertex moves `Unvisited -> Tentative -> Settled`. The loop extracts the
//! cheapest tentative label, settles it, stops if it sits on the target, and
//! otherwise expands it over the vertex's outgoing edges. Successors that the
//! creator rejects, or that an existing tentative or settled label already
//! matches, are dropped on the spot; nothing but the final outcome leaves
//! [`SearchEngine::solve`].

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::config::SearchConfig;
use crate::creator::{ConstrainedLabelCreator, LabelCreator, StandardLabelCreator};
use crate::graph::{Graph, VertexKey};
use crate::label::Label;
use crate::permanent::PermanentStore;
use crate::tentative::{HeapStats, TentativeStore};
use crate::tracer::Tracer;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SearchOutcome<W, E> {
    Found { total_cost: W, path: Vec<E> },
    Unreachable,
    /// `vertex` is not a key of the graph.
    InvalidInput { vertex: VertexKey, vertex_count: usize },
    /// The work limit or the abort callback stopped the search first.
    Aborted { settled: usize },
}

impl<W: Copy, E> SearchOutcome<W, E> {
    pub fn kind(&self) -> &'static str {
        match self {
            SearchOutcome::Found { .. } => "found",
            SearchOutcome::Unreachable => "unreachable",
            SearchOutcome::InvalidInput { .. } => "invalid_input",
            SearchOutcome::Aborted { .. } => "aborted",
        }
    }

    pub fn is_found(&self) -> bool { matches!(self, SearchOutcome::Found { .. }) }

    pub fn total_cost(&self) -> Option<W> {
        match self {
            SearchOutcome::Found { total_cost, .. } => Some(*total_cost),
            _ => None,
        }
    }

    pub fn path(&self) -> Option<&[E]> {
        match self {
            SearchOutcome::Found { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Counters for the most recent query on an engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub settled: usize,
    pub edges_scanned: u64,
    pub infeasible: u64,
    pub dominated: u64,
    pub heap: HeapStats,
}

impl SearchStats {
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> { serde_json::to_value(self) }
}

/// Result of [`SearchEngine::shortest_path_tree`].
#[derive(Clone, Debug)]
pub enum TreeOutcome<W, E> {
    /// Every vertex reachable within the ceiling is settled.
    Complete(PermanentStore<W, E>),
    /// The work limit stopped the search; unsettled vertices may still be reachable.
    Aborted(PermanentStore<W, E>),
    InvalidInput { vertex: VertexKey, vertex_count: usize },
}

impl<W, E> TreeOutcome<W, E> {
    pub fn is_complete(&self) -> bool { matches!(self, TreeOutcome::Complete(_)) }

    /// The store only if the tree is complete.
    pub fn complete(self) -> Option<PermanentStore<W, E>> {
        match self {
            TreeOutcome::Complete(store) => Some(store),
            _ => None,
        }
    }

    /// Whatever was settled, complete or not.
    pub fn settled(self) -> Option<PermanentStore<W, E>> {
        match self {
            TreeOutcome::Complete(store) | TreeOutcome::Aborted(store) => Some(store),
            TreeOutcome::InvalidInput { .. } => None,
        }
    }
}

enum Stop<W> {
    Target(W),
    Exhausted,
    Aborted,
}

pub type DynCreator<'g, G> = Box<dyn LabelCreator<G> + 'g>;

/// One engine per graph; queries run one at a time and share nothing but the
/// configuration and the creator.
pub struct SearchEngine<'g, G: Graph, C = DynCreator<'g, G>> {
    graph: &'g G,
    creator: C,
    config: SearchConfig,
    last_stats: SearchStats,
}

impl<'g, G: Graph + 'g> SearchEngine<'g, G> {
    /// Plain shortest paths when `max_cost` is `None`, otherwise every
    /// successor costing more than `max_cost` is pruned.
    pub fn new(graph: &'g G, max_cost: Option<G::Weight>) -> Self {
        let creator: DynCreator<'g, G> = match max_cost {
            Some(max_cost) => Box::new(ConstrainedLabelCreator::standard(max_cost)),
            None => Box::new(StandardLabelCreator),
        };
        Self::with_creator(graph, creator)
    }
}

impl<'g, G: Graph, C: LabelCreator<G>> SearchEngine<'g, G, C> {
    pub fn with_creator(graph: &'g G, creator: C) -> Self {
        Self { graph, creator, config: SearchConfig::default(), last_stats: SearchStats::default() }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SearchConfig { &self.config }
    pub fn graph(&self) -> &'g G { self.graph }
    pub fn last_stats(&self) -> SearchStats { self.last_stats }

    pub fn solve(&mut self, source: VertexKey, target: VertexKey) -> SearchOutcome<G::Weight, G::Edge> {
        self.solve_with_abort(source, target, |_| false)
    }

    /// `should_abort` is consulted before every extraction; returning true
    /// ends the query with [`SearchOutcome::Aborted`].
    pub fn solve_with_abort(
        &mut self,
        source: VertexKey,
        target: VertexKey,
        should_abort: impl FnMut(&SearchStats) -> bool,
    ) -> SearchOutcome<G::Weight, G::Edge> {
        let vertex_count = self.graph.vertex_count();
        for vertex in [source, target] {
            if !self.graph.contains_vertex(vertex) {
                warn!(vertex, vertex_count, "search endpoint is not a vertex of the graph");
                self.last_stats = SearchStats::default();
                return SearchOutcome::InvalidInput { vertex, vertex_count };
            }
        }
        debug!(source, target, vertex_count, max_settled = ?self.config.max_settled, "label-setting search started");

        let (stop, permanent) = self.run(source, Some(target), should_abort);
        let outcome = match stop {
            Stop::Target(total_cost) => {
                let path = Tracer::new(self.graph, &permanent).reconstruct(target, source);
                SearchOutcome::Found { total_cost, path }
            }
            Stop::Exhausted => SearchOutcome::Unreachable,
            Stop::Aborted => SearchOutcome::Aborted { settled: permanent.settled_count() },
        };
        debug!(
            outcome = outcome.kind(),
            settled = self.last_stats.settled,
            edges_scanned = self.last_stats.edges_scanned,
            infeasible = self.last_stats.infeasible,
            "label-setting search finished"
        );
        outcome
    }

    /// Settles everything reachable from `source` (within the ceiling, if
    /// any) and hands back the permanent store, e.g. for several
    /// [`Tracer`] walks. A work limit that cuts the search short yields
    /// [`TreeOutcome::Aborted`] so a missing vertex is never mistaken for an
    /// unreachable one.
    pub fn shortest_path_tree(&mut self, source: VertexKey) -> TreeOutcome<G::Weight, G::Edge> {
        let vertex_count = self.graph.vertex_count();
        if !self.graph.contains_vertex(source) {
            warn!(vertex = source, vertex_count, "search endpoint is not a vertex of the graph");
            self.last_stats = SearchStats::default();
            return TreeOutcome::InvalidInput { vertex: source, vertex_count };
        }
        match self.run(source, None, |_| false) {
            (Stop::Aborted, permanent) => {
                debug!(source, settled = permanent.settled_count(), "shortest-path tree cut short by the work limit");
                TreeOutcome::Aborted(permanent)
            }
            (_, permanent) => TreeOutcome::Complete(permanent),
        }
    }

    fn run(
        &mut self,
        source: VertexKey,
        target: Option<VertexKey>,
        mut should_abort: impl FnMut(&SearchStats) -> bool,
    ) -> (Stop<G::Weight>, PermanentStore<G::Weight, G::Edge>) {
        let n = self.graph.vertex_count();
        let mut tentative = TentativeStore::new(n);
        let mut permanent = PermanentStore::new(n);
        let mut stats = SearchStats::default();
        let mut edges = Vec::new();

        tentative.try_insert_or_improve(Label::seed(source));

        let stop = loop {
            if tentative.is_empty() {
                break Stop::Exhausted;
            }
            stats.heap = tentative.stats();
            if self.config.max_settled.is_some_and(|max| stats.settled >= max) || should_abort(&stats) {
                break Stop::Aborted;
            }

            let label = tentative.extract_min();
            let vertex = label.vertex();
            debug_assert!(!tentative.contains(vertex));
            permanent.settle(label);
            stats.settled += 1;
            trace!(vertex, cost = ?label.cost(), "settled");

            if target == Some(vertex) {
                break Stop::Target(label.cost());
            }

            edges.clear();
            self.graph.outgoing_edges(vertex, &mut edges);
            for &edge in &edges {
                stats.edges_scanned += 1;
                let candidate = match self.creator.create(self.graph, &label, edge) {
                    Ok(candidate) => candidate,
                    Err(reason) => {
                        stats.infeasible += 1;
                        trace!(vertex, ?edge, %reason, "successor pruned");
                        continue;
                    }
                };
                if permanent.dominates_or_equal(&candidate) || tentative.dominates_or_equal(&candidate) {
                    stats.dominated += 1;
                    continue;
                }
                tentative.try_insert_or_improve(candidate);
            }
        };

        stats.heap = tentative.stats();
        self.last_stats = stats;
        (stop, permanent)
    }
}
