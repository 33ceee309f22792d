use rcsp_core::{
    ConstrainedLabelCreator, CsrGraph, EdgeId, FiniteCost, Graph, Infeasible, Label, LabelCreator, PermanentStore,
    SearchConfig, SearchEngine, SearchOutcome, StandardLabelCreator, TentativeStore, TraceError, Tracer, VertexKey,
};

fn triangle() -> CsrGraph<u32> {
    // ids: 0 = 0->1 (1), 1 = 0->2 (3), 2 = 1->2 (1)
    CsrGraph::from_edges(3, &[(0, 1, 1), (1, 2, 1), (0, 2, 3)]).unwrap()
}

#[test]
fn end_to_end_unconstrained_and_constrained() {
    let g = triangle();
    assert_eq!(
        SearchEngine::new(&g, None).solve(0, 2),
        SearchOutcome::Found { total_cost: 2, path: vec![EdgeId(0), EdgeId(2)] }
    );
    assert_eq!(SearchEngine::new(&g, Some(1)).solve(0, 2), SearchOutcome::Unreachable);
    assert_eq!(SearchEngine::new(&g, Some(1)).solve(0, 1).total_cost(), Some(1));
    assert_eq!(SearchEngine::new(&g, None).solve(0, 99), SearchOutcome::InvalidInput { vertex: 99, vertex_count: 3 });
}

#[test]
fn unreachable_without_ceiling() {
    let g = CsrGraph::from_edges(3, &[(0, 1, 1u32)]).unwrap();
    let mut engine = SearchEngine::new(&g, None);
    assert_eq!(engine.solve(0, 2), SearchOutcome::Unreachable);
    assert_eq!(engine.solve(1, 0), SearchOutcome::Unreachable);
    assert_eq!(engine.last_stats().settled, 1);
}

#[test]
fn store_ordering_properties() {
    let mut t: TentativeStore<u32, EdgeId> = TentativeStore::new(2);
    t.try_insert_or_improve(Label::new(0, 0, EdgeId(0)));
    t.try_insert_or_improve(Label::new(1, 0, EdgeId(1)));
    assert_eq!(t.extract_min().vertex(), 0);
    assert_eq!(t.extract_min().vertex(), 1);
    t.try_insert_or_improve(Label::new(0, 1, EdgeId(2)));
    assert_eq!(t.extract_min().cost(), 1);

    let mut d: TentativeStore<u32, EdgeId> = TentativeStore::new(1);
    d.try_insert_or_improve(Label::new(0, 1, EdgeId(0)));
    d.try_insert_or_improve(Label::new(0, 0, EdgeId(1)));
    assert_eq!(d.len(), 1);
    assert_eq!(d.extract_min().cost(), 0);
    assert!(d.is_empty());
}

#[test]
fn settled_vertex_blocks_reinsertion() {
    let mut p: PermanentStore<u32, EdgeId> = PermanentStore::new(2);
    p.settle(Label::new(1, 4, EdgeId(0)));
    for cost in [4, 5, 100] {
        assert!(p.dominates_or_equal(&Label::new(1, cost, EdgeId(1))));
    }
    assert_eq!(p.cost(1), Some(4));
}

#[test]
fn ceiling_accepts_equal_and_rejects_above() {
    let g = CsrGraph::from_edges(2, &[(0, 1, 5u32), (0, 1, 6)]).unwrap();
    let c = ConstrainedLabelCreator::new(StandardLabelCreator, 5u32);
    let seed = Label::seed(0);
    assert!(c.create(&g, &seed, EdgeId(0)).is_ok());
    assert_eq!(c.create(&g, &seed, EdgeId(1)), Err(Infeasible::ExceedsCeiling { cost: 6, max_cost: 5 }));
    // the infeasible parallel edge never reaches a store
    let mut engine = SearchEngine::new(&g, Some(5));
    assert_eq!(engine.solve(0, 1), SearchOutcome::Found { total_cost: 5, path: vec![EdgeId(0)] });
    assert_eq!(engine.last_stats().infeasible, 1);
    assert_eq!(engine.last_stats().heap.pushes, 2);
}

#[test]
fn first_equal_cost_candidate_wins() {
    // two equal-cost routes into 3; the edge scanned first keeps the entry
    let g = CsrGraph::from_edges(4, &[(0, 1, 1u32), (0, 2, 1), (1, 3, 1), (2, 3, 1)]).unwrap();
    let outcome = SearchEngine::new(&g, None).solve(0, 3);
    assert_eq!(outcome, SearchOutcome::Found { total_cost: 2, path: vec![EdgeId(0), EdgeId(2)] });
}

#[test]
fn overflow_is_infeasible_not_wrapped() {
    let g = CsrGraph::from_edges(3, &[(0, 1, 200u8), (1, 2, 100), (0, 2, 255)]).unwrap();
    let mut engine = SearchEngine::new(&g, None);
    assert_eq!(engine.solve(0, 2), SearchOutcome::Found { total_cost: 255, path: vec![EdgeId(1)] });
    assert_eq!(engine.last_stats().infeasible, 1);
}

#[test]
fn float_costs() {
    let w = |x: f32| FiniteCost::new(x).unwrap();
    let g = CsrGraph::from_edges(3, &[(0, 1, w(0.5)), (1, 2, w(0.25)), (0, 2, w(1.0))]).unwrap();
    assert_eq!(SearchEngine::new(&g, None).solve(0, 2).total_cost(), Some(w(0.75)));
    assert_eq!(SearchEngine::new(&g, Some(w(0.6))).solve(0, 2), SearchOutcome::Unreachable);
}

#[test]
fn work_limit_from_config() {
    let g = CsrGraph::from_edges(4, &[(0, 1, 1u32), (1, 2, 1), (2, 3, 1)]).unwrap();
    let config = SearchConfig::from_json(r#"{"max_settled": 2}"#).unwrap();
    let mut engine = SearchEngine::new(&g, None).with_config(config);
    assert_eq!(engine.solve(0, 3), SearchOutcome::Aborted { settled: 2 });
    assert!(engine.solve(0, 1).is_found());
}

#[test]
fn tracer_rejects_forged_store() {
    let g = triangle();
    let mut p = PermanentStore::new(3);
    p.settle(Label::seed(0));
    p.settle(Label::new(1, 2, EdgeId(0)));
    assert!(matches!(
        Tracer::new(&g, &p).try_reconstruct(1, 0),
        Err(TraceError::AdditivityMismatch { vertex: 1, predecessor: 0, .. })
    ));
}

// A non-CSR graph: plain adjacency lists with the edge stored inline.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Arc {
    from: VertexKey,
    to: VertexKey,
    cost: u64,
}

struct AdjacencyList(Vec<Vec<Arc>>);

impl Graph for AdjacencyList {
    type Edge = Arc;
    type Weight = u64;

    fn vertex_count(&self) -> usize { self.0.len() }
    fn outgoing_edges(&self, vertex: VertexKey, out: &mut Vec<Arc>) { out.extend_from_slice(&self.0[vertex]); }
    fn source(&self, edge: Arc) -> VertexKey { edge.from }
    fn target(&self, edge: Arc) -> VertexKey { edge.to }
    fn weight(&self, edge: Arc) -> u64 { edge.cost }
}

#[test]
fn any_graph_implementation_plugs_in() {
    let a = Arc { from: 0, to: 1, cost: 7 };
    let b = Arc { from: 1, to: 2, cost: 1 };
    let c = Arc { from: 0, to: 2, cost: 9 };
    let g = AdjacencyList(vec![vec![a, c], vec![b], vec![]]);
    assert_eq!(SearchEngine::new(&g, None).solve(0, 2), SearchOutcome::Found { total_cost: 8, path: vec![a, b] });
    assert_eq!(SearchEngine::new(&g, Some(8)).solve(0, 2).path(), Some(&[a, b][..]));
    assert_eq!(SearchEngine::new(&g, Some(7)).solve(0, 2), SearchOutcome::Unreachable);
}

#[test]
fn boxed_creator_over_trait_object_graph() {
    let g = triangle();
    let dyn_graph: &dyn Graph<Edge = EdgeId, Weight = u32> = &g;
    let creator: Box<dyn LabelCreator<&dyn Graph<Edge = EdgeId, Weight = u32>>> = Box::new(StandardLabelCreator);
    let mut engine = SearchEngine::with_creator(&dyn_graph, creator);
    assert_eq!(engine.solve(0, 2).total_cost(), Some(2));
}
