use crate::graph::{Graph, MutableGraph};
use crate::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Name given to the grid cell at column `x`, row `y`
pub fn grid_node_name(x: usize, y: usize) -> String {
    format!("r{}c{}", y, x)
}

/// Generates a `width` x `height` grid where orthogonal neighbours are joined
/// by two-way connections of weight 1 and diagonal neighbours by one-way
/// connections of weight 1.4 pointing down-right.
pub fn generate_grid(width: usize, height: usize) -> Result<Graph> {
    let mut graph = Graph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            graph.add_node(grid_node_name(x, y))?;
        }
    }

    for y in 0..height {
        for x in 0..width {
            let current = grid_node_name(x, y);
            if x + 1 < width {
                graph.add_connection(&current, &grid_node_name(x + 1, y), 1.0, true)?;
            }
            if y + 1 < height {
                graph.add_connection(&current, &grid_node_name(x, y + 1), 1.0, true)?;
            }
            if x + 1 < width && y + 1 < height {
                graph.add_connection(&current, &grid_node_name(x + 1, y + 1), 1.4, false)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a random directed graph with `n` nodes named `n0..n{n-1}` and about
/// `edges_per_node * n` connections with weights in `[1, 100)`.
///
/// The same seed always yields the same graph. Roughly a quarter of the
/// connections are two-way.
pub fn generate_random(n: usize, edges_per_node: usize, seed: u64) -> Result<Graph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_capacity(n);
    let names: Vec<String> = (0..n).map(|i| format!("n{}", i)).collect();

    for name in &names {
        graph.add_node(name.as_str())?;
    }
    if n < 2 {
        return Ok(graph);
    }

    for _ in 0..(n * edges_per_node) {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        // Self-loops are rejected by the graph
        if from == to {
            continue;
        }
        let weight: f64 = rng.gen_range(1.0..100.0);
        let two_way = rng.gen_bool(0.25);
        graph.add_connection(&names[from], &names[to], weight, two_way)?;
    }

    Ok(graph)
}

/// Generates a random geometric graph in the unit square
///
/// Points closer than `radius` are joined by a two-way connection weighted by
/// their Euclidean distance.
pub fn generate_geometric(n: usize, radius: f64, seed: u64) -> Result<Graph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_capacity(n);

    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let x: f64 = rng.gen_range(0.0..1.0);
        let y: f64 = rng.gen_range(0.0..1.0);
        points.push((format!("p{}", i), x, y));
        graph.add_node(format!("p{}", i))?;
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let (ref a, x1, y1) = points[i];
            let (ref b, x2, y2) = points[j];
            let dist = ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt();
            // Coincident points would produce a zero weight
            if dist > 0.0 && dist <= radius {
                graph.add_connection(a, b, dist, true)?;
            }
        }
    }

    Ok(graph)
}
