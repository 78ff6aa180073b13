mod common;

use dwgraph::{Error, Graph, GraphConfig, VertexKey};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Station(&'static str);

impl VertexKey for Station {}

#[test]
fn test_idempotent_vertex_creation() {
    common::init_tracing();
    let mut graph = Graph::new();

    assert!(graph.create_vertex("v").unwrap());
    assert!(!graph.create_vertex("v").unwrap());
    assert_eq!(graph.vertices(), vec!["v"]);
}

#[test]
fn test_edge_creation_creates_endpoints() {
    common::init_tracing();
    let mut graph = Graph::new();

    assert!(graph.create_edge(Station("a"), Station("b"), 5).unwrap());
    assert!(graph.is_vertex(&Station("a")).unwrap());
    assert!(graph.is_vertex(&Station("b")).unwrap());
    assert_eq!(graph.edge_cost(&Station("a"), &Station("b")).unwrap(), Some(5));
    assert_eq!(graph.edge_cost(&Station("b"), &Station("a")).unwrap(), None);
}

#[test]
fn test_weight_overwrite_keeps_single_edge() {
    let mut graph = Graph::new();
    graph.create_edge("a", "b", 3).unwrap();
    graph.create_edge("a", "c", 4).unwrap();
    graph.create_edge("a", "b", 7).unwrap();

    let edges = graph.outgoing_edges(&"a").unwrap().unwrap();
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0].target(), &"b");
    assert_eq!(edges[0].weight(), 7);
    assert_eq!(graph.adjacent_vertices(&"a").unwrap(), Some(vec!["b", "c"]));
}

#[test]
fn test_zero_weight_is_valid() {
    let mut graph = Graph::new();
    assert!(graph.create_edge(1u8, 2u8, 0).unwrap());
    assert_eq!(graph.edge_cost(&1, &2).unwrap(), Some(0));
}

#[test]
fn test_negative_weight_rejected() {
    let mut graph = Graph::new();
    graph.create_vertex("a").unwrap();

    assert!(!graph.create_edge("a", "b", -1).unwrap());
    assert!(!graph.is_vertex(&"b").unwrap());
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_negative_weight_keeps_existing_edge() {
    let mut graph = Graph::new();
    graph.create_edge("a", "b", 2).unwrap();

    assert!(!graph.create_edge("a", "b", -3).unwrap());
    assert_eq!(graph.edge_cost(&"a", &"b").unwrap(), Some(2));
}

#[test]
fn test_remove_vertex_cascades_incoming_edges() {
    common::init_tracing();
    let mut graph = Graph::new();
    graph.create_edge("a", "b", 1).unwrap();
    graph.create_edge("c", "b", 2).unwrap();
    graph.create_edge("b", "c", 3).unwrap();

    assert!(graph.remove_vertex(&"b").unwrap());
    assert!(!graph.is_vertex(&"b").unwrap());
    assert_eq!(graph.edge_cost(&"a", &"b").unwrap(), None);
    assert_eq!(graph.predecessors_of_vertex(&"b").unwrap(), None);
    assert_eq!(graph.predecessors_of_vertex(&"c").unwrap(), None);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.vertices(), vec!["a", "c"]);
}

#[test]
fn test_self_loop() {
    let mut graph = Graph::new();
    graph.create_edge(1u32, 1u32, 4).unwrap();

    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.adjacent_vertices(&1).unwrap(), Some(vec![1]));
    assert_eq!(graph.predecessors_of_vertex(&1).unwrap(), Some(vec![1]));
    assert_eq!(graph.to_string(), "1: 1 -(4)-> 1,| ");

    assert!(graph.remove_vertex(&1).unwrap());
    assert!(graph.is_empty());
}

#[test]
fn test_successor_predecessor_symmetry() {
    let mut graph = Graph::new();
    let edges = [(1u32, 2u32), (1, 3), (2, 3), (3, 1), (4, 2)];
    for (i, (s, t)) in edges.iter().enumerate() {
        graph.create_edge(*s, *t, i as i64).unwrap();
    }

    for (s, t) in edges {
        assert!(graph.adjacent_vertices(&s).unwrap().unwrap().contains(&t));
        assert!(graph.predecessors_of_vertex(&t).unwrap().unwrap().contains(&s));
    }
    assert_eq!(graph.predecessors_of_vertex(&2).unwrap(), Some(vec![1, 4]));
    assert_eq!(graph.predecessors_of_vertex(&4).unwrap(), None);
}

#[test]
fn test_vertices_is_a_snapshot() {
    let mut graph = Graph::new();
    graph.create_edge("a", "b", 1).unwrap();

    let snapshot = graph.vertices();
    for v in &snapshot {
        graph.remove_vertex(v).unwrap();
    }
    assert_eq!(snapshot, vec!["a", "b"]);
    assert!(graph.is_empty());
}

#[test]
fn test_absent_arguments_rejected_without_mutation() {
    common::init_tracing();
    let mut graph: Graph<Option<&str>> = Graph::new();
    graph.create_edge(Some("a"), Some("b"), 1).unwrap();
    let before = graph.clone();

    assert!(matches!(graph.create_vertex(None), Err(Error::InvalidArgument(_))));
    assert!(graph.is_vertex(&None).is_err());
    assert!(graph.create_edge(None, Some("c"), 1).is_err());
    assert!(graph.create_edge(Some("c"), None, 1).is_err());
    assert!(graph.edge_cost(&Some("a"), &None).is_err());
    assert!(graph.remove_edge(&None, &Some("b")).is_err());
    assert!(graph.remove_vertex(&None).is_err());
    assert!(graph.adjacent_vertices(&None).is_err());
    assert!(graph.predecessors_of_vertex(&None).is_err());
    assert!(graph.out_degree(&None).is_err());
    assert!(graph.in_degree(&None).is_err());
    assert!(graph.outgoing_edges(&None).is_err());
    assert!(graph.divide_graph(vec![Some("a"), Some("b"), None]).is_err());

    assert_eq!(graph, before);
}

#[test]
fn test_with_config_and_clear() {
    let mut graph = Graph::with_config(GraphConfig::new().with_vertex_capacity(64));
    for i in 0..10u64 {
        graph.create_edge(i, i + 1, i as i64).unwrap();
    }
    assert_eq!(graph.vertex_count(), 11);
    assert_eq!(graph.iter().map(|(_, edges)| edges.len()).sum::<usize>(), 10);

    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.to_string(), "");
}
