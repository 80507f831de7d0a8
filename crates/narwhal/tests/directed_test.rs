use narwhal::{BaseGraph, EdgeId, Error, ErrorKind, Graph, GraphKind, IdEdgeFactory};

fn graph(kind: GraphKind) -> BaseGraph<u32, EdgeId> {
    BaseGraph::from_kind(kind, IdEdgeFactory::new())
}

fn with_vertices(kind: GraphKind, vertices: &[u32]) -> BaseGraph<u32, EdgeId> {
    let mut g = graph(kind);
    for &v in vertices {
        g.add_vertex(v);
    }
    g
}

fn assert_directed_adjacency_consistent(g: &BaseGraph<u32, EdgeId>) {
    let vertices = g.vertex_set();
    for e in g.edge_set() {
        let s = g.edge_source(&e).unwrap();
        let t = g.edge_target(&e).unwrap();
        assert!(vertices.contains(&s), "{e:?} source {s} not a member");
        assert!(vertices.contains(&t), "{e:?} target {t} not a member");
        assert!(g.outgoing_edges_of(&s).unwrap().contains(&e));
        assert!(g.incoming_edges_of(&t).unwrap().contains(&e));
    }
    for v in &vertices {
        for e in g.outgoing_edges_of(v).unwrap() {
            assert_eq!(g.edge_source(&e).unwrap(), *v);
        }
        for e in g.incoming_edges_of(v).unwrap() {
            assert_eq!(g.edge_target(&e).unwrap(), *v);
        }
    }
}

#[test]
fn simple_directed_graph_rejects_a_second_edge_between_the_same_pair() {
    let mut g = with_vertices(GraphKind::DefaultDirectedGraph, &[1, 2, 3]);

    assert!(g.add_edge(&1, &2).unwrap().is_some());
    assert!(g.add_edge(&1, &3).unwrap().is_some());
    assert_eq!(g.add_edge(&1, &2).unwrap(), None);

    assert_eq!(g.vertex_set().len(), 3);
    assert_eq!(g.edge_set().len(), 2);
    assert_directed_adjacency_consistent(&g);
}

#[test]
fn reverse_orientation_is_a_different_pair_in_directed_graphs() {
    let mut g = with_vertices(GraphKind::SimpleDirectedGraph, &[1, 2]);

    let forward = g.add_edge(&1, &2).unwrap().unwrap();
    let backward = g.add_edge(&2, &1).unwrap().unwrap();

    assert_ne!(forward, backward);
    assert_eq!(g.edge(&1, &2), Some(forward));
    assert_eq!(g.edge(&2, &1), Some(backward));
    assert_eq!(g.all_edges(&1, &2).len(), 1);
}

#[test]
fn removing_a_vertex_removes_its_edges() {
    let mut g = with_vertices(GraphKind::DefaultDirectedGraph, &[1, 2, 3]);
    g.add_edge(&1, &2).unwrap();
    g.add_edge(&1, &3).unwrap();

    assert!(g.remove_vertex(&1));

    assert_eq!(g.edge_set().len(), 0);
    assert_eq!(g.vertex_set().into_iter().collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(g.in_degree_of(&2).unwrap(), 0);
    assert!(!g.remove_vertex(&1));
    assert_directed_adjacency_consistent(&g);
}

#[test]
fn loops_are_rejected_when_disallowed() {
    let mut g = with_vertices(GraphKind::SimpleDirectedGraph, &[1]);

    let err = g.add_edge(&1, &1).unwrap_err();

    assert!(matches!(err, Error::LoopsNotAllowed { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.out_degree_of(&1).unwrap(), 0);
}

#[test]
fn caller_supplied_loop_is_rejected_when_disallowed() {
    let mut g = with_vertices(GraphKind::SimpleDirectedGraph, &[1]);

    let err = g.add_edge_with(&1, &1, EdgeId(7)).unwrap_err();

    assert!(matches!(err, Error::LoopsNotAllowed { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(!g.contains_edge(&EdgeId(7)));
    assert_eq!(g.out_degree_of(&1).unwrap(), 0);
}

#[test]
fn multiplicity_is_checked_before_loops_for_caller_supplied_edges() {
    let mut g = with_vertices(GraphKind::DefaultDirectedGraph, &[1]);
    g.add_edge(&1, &1).unwrap();

    assert!(!g.add_edge_with(&1, &1, EdgeId(50)).unwrap());
}

#[test]
fn adding_an_edge_requires_both_endpoints() {
    let mut g = with_vertices(GraphKind::DefaultDirectedGraph, &[1]);

    let err = g.add_edge(&1, &2).unwrap_err();
    assert!(matches!(err, Error::VertexNotFound { .. }));

    let err = g.add_edge_with(&2, &1, EdgeId(3)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn caller_supplied_edges_are_registered_once() {
    let mut g = with_vertices(GraphKind::DirectedMultigraph, &[1, 2, 3]);

    assert!(g.add_edge_with(&1, &2, EdgeId(100)).unwrap());
    assert!(!g.add_edge_with(&2, &3, EdgeId(100)).unwrap());

    assert_eq!(g.edge_source(&EdgeId(100)).unwrap(), 1);
    assert_eq!(g.edge_target(&EdgeId(100)).unwrap(), 2);
    assert_eq!(g.in_degree_of(&3).unwrap(), 0);
}

#[test]
fn factory_identity_collision_adds_nothing() {
    let mut g: BaseGraph<u32, &'static str> =
        BaseGraph::directed_multigraph(|_: &u32, _: &u32| "only");
    g.add_vertex(1);
    g.add_vertex(2);
    g.add_vertex(3);

    assert_eq!(g.add_edge(&1, &2).unwrap(), Some("only"));
    assert_eq!(g.add_edge(&1, &3).unwrap(), None);
    assert_eq!(g.edge_target(&"only").unwrap(), 2);
    assert_eq!(g.out_degree_of(&1).unwrap(), 1);
}

#[test]
fn edges_of_reports_each_loop_once() {
    let mut g = with_vertices(GraphKind::DirectedMultigraph, &[1, 2, 3]);
    g.add_edge(&1, &1).unwrap();
    g.add_edge(&1, &1).unwrap();
    g.add_edge(&1, &2).unwrap();
    g.add_edge(&3, &1).unwrap();

    let loops = g.all_edges(&1, &1).len();
    let edges = g.edges_of(&1).unwrap();

    assert_eq!(loops, 2);
    assert_eq!(edges.len(), 4);
    assert_eq!(g.in_degree_of(&1).unwrap(), 3);
    assert_eq!(g.out_degree_of(&1).unwrap(), 3);
    assert_eq!(
        g.in_degree_of(&1).unwrap() + g.out_degree_of(&1).unwrap(),
        edges.len() + loops
    );
    assert_directed_adjacency_consistent(&g);
}

#[test]
fn degree_of_is_undirected_only() {
    let g = with_vertices(GraphKind::DefaultDirectedGraph, &[1]);

    let err = g.degree_of(&1).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::WrongMode);
}

#[test]
fn queries_on_unknown_vertices() {
    let g = with_vertices(GraphKind::DefaultDirectedGraph, &[1]);

    assert!(matches!(
        g.edges_of(&9).unwrap_err(),
        Error::VertexNotFound { .. }
    ));
    assert!(g.outgoing_edges_of(&9).is_err());
    assert_eq!(g.edge(&1, &9), None);
    assert!(g.all_edges(&9, &1).is_empty());
    assert!(!g.contains_vertex(&9));
}

#[test]
fn edge_removal_is_idempotent() {
    let mut g = with_vertices(GraphKind::DefaultDirectedGraph, &[1, 2]);
    let e = g.add_edge(&1, &2).unwrap().unwrap();

    assert!(g.remove_edge(&e));
    assert!(!g.remove_edge(&e));
    assert_eq!(g.remove_edge_between(&1, &2), None);
    assert!(g.outgoing_edges_of(&1).unwrap().is_empty());
    assert!(g.incoming_edges_of(&2).unwrap().is_empty());
}

#[test]
fn remove_edge_between_returns_the_removed_edge() {
    let mut g = with_vertices(GraphKind::DefaultDirectedGraph, &[1, 2]);
    let e = g.add_edge(&1, &2).unwrap().unwrap();

    assert_eq!(g.remove_edge_between(&2, &1), None);
    assert_eq!(g.remove_edge_between(&1, &2), Some(e));
    assert!(!g.contains_edge(&e));
}

#[test]
fn adding_and_removing_a_vertex_restores_the_vertex_set() {
    let mut g = with_vertices(GraphKind::DefaultDirectedGraph, &[1, 2]);
    g.add_edge(&1, &2).unwrap();
    let before = g.vertex_set();

    assert!(g.add_vertex(5));
    assert!(!g.add_vertex(5));
    assert!(g.remove_vertex(&5));

    assert_eq!(g.vertex_set(), before);
    assert!(g.edges_of(&5).is_err());
}

#[test]
fn query_results_are_snapshots() {
    let mut g = with_vertices(GraphKind::DefaultDirectedGraph, &[1, 2, 3]);
    let a = g.add_edge(&1, &2).unwrap().unwrap();
    g.add_edge(&1, &3).unwrap();

    let outgoing = g.outgoing_edges_of(&1).unwrap();
    g.remove_edge(&a);

    assert_eq!(outgoing.len(), 2);
    assert_eq!(g.outgoing_edges_of(&1).unwrap().len(), 1);
}

#[test]
fn remove_all_helpers() {
    let mut g = with_vertices(GraphKind::DirectedMultigraph, &[1, 2, 3, 4]);
    g.add_edge(&1, &2).unwrap();
    g.add_edge(&1, &2).unwrap();
    g.add_edge(&2, &1).unwrap();
    let c = g.add_edge(&3, &4).unwrap().unwrap();

    let removed = g.remove_all_edges_between(&1, &2);
    assert_eq!(removed.len(), 2);
    assert_eq!(g.edge_count(), 2);

    assert!(g.remove_all_edges(&[c]));
    assert!(!g.remove_all_edges(&[c]));

    assert!(g.remove_all_vertices(&[1, 9]));
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.vertex_count(), 3);
}

#[test]
fn display_lists_vertices_and_directed_edges() {
    let mut g = with_vertices(GraphKind::DefaultDirectedGraph, &[1, 2]);
    g.add_edge(&1, &2).unwrap();

    assert_eq!(g.to_string(), "([1, 2], [(1,2)])");
}

#[test]
fn interleaved_mutations_keep_adjacency_consistent() {
    let mut g = graph(GraphKind::DirectedPseudograph);
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    for _ in 0..500 {
        let a = (next() % 8) as u32;
        let b = (next() % 8) as u32;
        match next() % 5 {
            0 => {
                g.add_vertex(a);
            }
            1 | 2 => {
                g.add_vertex(a);
                g.add_vertex(b);
                g.add_edge(&a, &b).unwrap();
            }
            3 => {
                g.remove_edge_between(&a, &b);
            }
            _ => {
                g.remove_vertex(&a);
            }
        }
        assert_directed_adjacency_consistent(&g);
    }
}
