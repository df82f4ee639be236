use graph_shortest_path::data_structures::{BinaryHeapFrontier, FrontierQueue, LinearScanFrontier};
use graph_shortest_path::graph::generators::{generate_geometric, generate_random};
use graph_shortest_path::{extract_path, Dijkstra, Frontier, Graph, WeightedGraph};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn check_against_linear_scan(graph: &Graph, source: &str) {
    let heap = Dijkstra::new().compute(graph, source).unwrap();
    let scan = Dijkstra::new()
        .with_frontier(Frontier::LinearScan)
        .compute(graph, source)
        .unwrap();

    assert_eq!(heap.source, scan.source);
    for (id, (a, b)) in heap.distances.iter().zip(&scan.distances).enumerate() {
        assert!(
            a == b || (a - b).abs() < 1e-9,
            "distance mismatch at {:?}: {} vs {}",
            graph.node_name(id),
            a,
            b
        );
    }
}

fn check_paths(graph: &Graph, source: &str) {
    let result = Dijkstra::new().compute(graph, source).unwrap();
    let source_id = graph.node_id(source).unwrap();
    assert_eq!(result.distance(source_id), 0.0);

    for id in 0..graph.node_count() {
        let distance = result.distance(id);
        assert!(distance >= 0.0, "negative distance at {}", id);
        if !distance.is_finite() {
            assert_eq!(result.predecessor(id), None);
            continue;
        }

        let target = graph.node_name(id).unwrap();
        let path = extract_path(graph, &result, source, target).unwrap();
        assert_eq!(path.first().map(String::as_str), Some(source));
        assert_eq!(path.last().map(String::as_str), Some(target));

        let walked: f64 = path
            .windows(2)
            .map(|pair| graph.connection_weight(&pair[0], &pair[1]).unwrap())
            .sum();
        assert!((walked - distance).abs() < 1e-9, "{} vs {}", walked, distance);
    }
}

#[test]
fn test_heap_matches_linear_scan_on_random_graphs() {
    init_logging();
    for seed in 0..20 {
        let graph = generate_random(60, 3, seed).unwrap();
        for source in ["n0", "n17", "n59"] {
            check_against_linear_scan(&graph, source);
        }
    }
}

#[test]
fn test_heap_matches_linear_scan_on_geometric_graphs() {
    for seed in 0..5 {
        let graph = generate_geometric(80, 0.2, seed).unwrap();
        check_against_linear_scan(&graph, "p0");
    }
}

#[test]
fn test_paths_sum_to_distances() {
    init_logging();
    for seed in 100..110 {
        let graph = generate_random(40, 2, seed).unwrap();
        check_paths(&graph, "n0");
        check_paths(&graph, "n39");
    }
}

#[test]
fn test_sparse_graph_leaves_nodes_unreached() {
    // One connection per node on average leaves many nodes unreachable
    let graph = generate_random(200, 1, 7).unwrap();
    let result = Dijkstra::new().compute(&graph, "n0").unwrap();
    assert!(result.reachable_count() >= 1);
    assert!(result.reachable_count() < graph.node_count());
    check_paths(&graph, "n0");
}

#[test]
fn test_generators_are_deterministic() {
    let a = generate_random(30, 4, 42).unwrap();
    let b = generate_random(30, 4, 42).unwrap();
    assert_eq!(a.edge_count(), b.edge_count());
    for name in a.node_names() {
        assert_eq!(a.connections(name).unwrap(), b.connections(name).unwrap());
    }
}

#[test]
fn test_heap_frontier_skips_stale_entries() {
    let mut frontier = BinaryHeapFrontier::new();
    let mut settled = vec![false; 3];
    frontier.push(1, 5.0);
    frontier.push(2, 3.0);
    frontier.push(1, 2.0);
    assert_eq!(frontier.len(), 3);

    assert_eq!(frontier.pop_min(&settled), Some((1, 2.0)));
    settled[1] = true;
    assert_eq!(frontier.pop_min(&settled), Some((2, 3.0)));
    settled[2] = true;
    // The stale (1, 5.0) entry is dropped
    assert_eq!(frontier.pop_min(&settled), None);
    assert!(frontier.is_empty());
}

#[test]
fn test_linear_scan_frontier_keeps_smallest_distance() {
    let mut frontier = LinearScanFrontier::new(4);
    let mut settled = vec![false; 4];
    frontier.push(3, 4.0);
    frontier.push(3, 9.0);
    frontier.push(0, 6.0);

    assert_eq!(frontier.pop_min(&settled), Some((3, 4.0)));
    settled[3] = true;
    assert_eq!(frontier.pop_min(&settled), Some((0, 6.0)));
    settled[0] = true;
    // Nodes 1 and 2 were never reached
    assert_eq!(frontier.pop_min(&settled), None);
}
