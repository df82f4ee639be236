use graph_shortest_path::{Dijkstra, Graph, MutableGraph};

#[test]
fn test_result_serializes_to_json() {
    let mut graph = Graph::new();
    for name in ["A", "B", "C"] {
        graph.add_node(name).unwrap();
    }
    graph.add_connection("A", "B", 2, true).unwrap();

    let result = Dijkstra::new().compute(&graph, "A").unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["source"], 0);
    assert_eq!(json["edge_count"], 2);
    assert_eq!(json["distances"][0], 0.0);
    assert_eq!(json["distances"][1], 2.0);
    assert_eq!(json["predecessors"][0], serde_json::Value::Null);
    assert_eq!(json["predecessors"][1], 0);
    // Unreached nodes have no predecessor and a non-finite distance, which JSON writes as null
    assert!(json["predecessors"][2].is_null());
    assert!(json["distances"][2].is_null());
}
