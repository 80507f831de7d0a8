use narwhal::{BaseGraph, Direction, EdgeId, Graph, GraphKind, GraphPolicy, IdEdgeFactory};

#[test]
fn default_policy_is_the_default_directed_graph() {
    let policy = GraphPolicy::default();

    assert_eq!(policy, GraphKind::DefaultDirectedGraph.policy());
    assert!(policy.directed);
    assert!(policy.allow_loops);
    assert!(!policy.allow_multiple_edges);
    assert!(!policy.weighted);
}

#[test]
fn presets() {
    let simple = GraphKind::SimpleGraph.policy();
    assert_eq!(simple.direction(), Direction::Undirected);
    assert!(!simple.allow_loops && !simple.allow_multiple_edges);

    let multi = GraphKind::Multigraph.policy();
    assert!(multi.allow_multiple_edges && !multi.allow_loops);

    let pseudo = GraphKind::Pseudograph.policy();
    assert!(pseudo.allow_multiple_edges && pseudo.allow_loops && !pseudo.directed);

    assert_eq!(
        GraphKind::DirectedWeightedMultigraph.policy(),
        GraphKind::DirectedMultigraph.policy().weighted()
    );
    assert_eq!(
        GraphKind::WeightedPseudograph.policy(),
        GraphKind::Pseudograph.policy().weighted()
    );
}

#[test]
fn graphs_report_their_preset_policy() {
    for kind in GraphKind::ALL {
        let g: BaseGraph<u32, EdgeId> = BaseGraph::from_kind(kind, IdEdgeFactory::new());
        let policy = kind.policy();

        assert_eq!(g.policy(), policy, "{kind:?}");
        assert_eq!(g.is_directed(), policy.directed);
        assert_eq!(g.is_allowing_loops(), policy.allow_loops);
        assert_eq!(g.is_allowing_multiple_edges(), policy.allow_multiple_edges);
        assert_eq!(g.is_weighted(), policy.weighted);
    }
}

#[test]
fn policy_deserializes_with_defaults_for_missing_fields() {
    let policy: GraphPolicy = serde_json::from_str(r#"{"allow_multiple_edges": true}"#).unwrap();

    assert_eq!(policy, GraphPolicy::new(true, true, true));
}

#[test]
fn policy_serializes_every_flag() {
    let json = serde_json::to_value(GraphKind::SimpleWeightedGraph.policy()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "allow_multiple_edges": false,
            "allow_loops": false,
            "directed": false,
            "weighted": true,
        })
    );
}

#[test]
fn graph_kind_uses_kebab_case_names() {
    let kind: GraphKind = serde_json::from_str(r#""directed-weighted-multigraph""#).unwrap();
    assert_eq!(kind, GraphKind::DirectedWeightedMultigraph);

    assert_eq!(
        serde_json::to_string(&GraphKind::SimpleDirectedGraph).unwrap(),
        r#""simple-directed-graph""#
    );
    assert_eq!(Direction::Undirected.to_string(), "undirected");
}

#[test]
fn graph_built_from_a_deserialized_policy() {
    let policy: GraphPolicy =
        serde_json::from_str(r#"{"directed": false, "allow_loops": false}"#).unwrap();
    let mut g: BaseGraph<&'static str, EdgeId> = BaseGraph::new(policy, IdEdgeFactory::new());
    g.add_vertex("a");

    assert!(g.add_edge(&"a", &"a").is_err());
    assert_eq!(g.degree_of(&"a").unwrap(), 0);
}
