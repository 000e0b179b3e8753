//! Seeded random graphs, for demos and for tests.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::graph::Graph;

/// Vertices `1..=vertex_count`, then `edge_attempts` random pairs of distinct vertices.
///
/// Pairs go through [`Graph::add_edge`], so a pair drawn twice adds one edge only and the graph
/// may end up with fewer edges than attempts. Six vertices with six to ten attempts gives the
/// kind of small scene a user edits by hand.
pub fn random_graph(vertex_count: usize, edge_attempts: usize, seed: u64) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new();

    for v in 1..=vertex_count as u32 {
        graph.add_vertex(v);
    }
    if vertex_count < 2 {
        return graph;
    }

    for _ in 0..edge_attempts {
        let a = rng.random_range(1..=vertex_count as u32);
        let mut b = rng.random_range(1..vertex_count as u32);
        // skip over `a` so both endpoints are uniform and distinct
        if b >= a {
            b += 1;
        }
        graph.add_edge(a, b);
    }

    graph
}

/// Random spanning tree on `0..vertex_count` plus `extra_edges` random attempts.
///
/// Always connected. Vertex `i` is the `i`-th inserted vertex.
pub fn random_connected_graph(vertex_count: usize, extra_edges: usize, seed: u64) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new();

    for i in 0..vertex_count as u32 {
        graph.add_vertex(i);
        if i > 0 {
            let j = rng.random_range(0..i);
            graph.add_edge(i, j);
        }
    }

    if vertex_count < 2 {
        return graph;
    }
    for _ in 0..extra_edges {
        let s = rng.random_range(0..vertex_count as u32);
        let t = rng.random_range(0..vertex_count as u32);
        // self-loops are rejected by add_edge
        graph.add_edge(s, t);
    }

    graph
}
