use std::fmt::Display;
use std::path::Path;

use hashbrown::{HashMap, HashSet};

use crate::graph::Graph;
use crate::types::{Vertex, canonical};

/// Returns a graph in DOT format with `route` highlighted.
///
/// It shows your vertex labels, node ids are insertion positions.
///
/// Vertices and edges on the route are filled/drawn in purple, everything else stays grey.
/// Pass an empty route to draw the plain graph.
///
/// Intended to be used with `neato`.
pub fn draw_graph<V: Vertex + Display>(graph: &Graph<V>, route: &[V]) -> String {
    let vertices = graph.vertices();
    let ids: HashMap<&V, usize> = vertices.iter().enumerate().map(|(i, v)| (v, i)).collect();
    let on_route: HashSet<&V> = route.iter().collect();
    let route_edges: HashSet<(&V, &V)> = route.windows(2).map(|w| canonical(&w[0], &w[1])).collect();

    let mut output = String::from("graph {\n");
    output.push_str("  mode=sgd;\n");
    output.push_str("  maxiter=1000;\n");
    output.push_str("  node [shape=circle, style=filled, fillcolor=\"#aaaaaa\"];\n");

    // Add vertices
    for (i, v) in vertices.iter().enumerate() {
        let fill = if on_route.contains(v) {
            ", fillcolor=\"#8a5cec\""
        } else {
            ""
        };
        output.push_str(&format!("  {} [label=\"{}\"{}];\n", i, escape_label(v), fill));
    }

    // Add edges
    for (a, b) in graph.edges() {
        let style = if route_edges.contains(&(&a, &b)) {
            "color=\"#8a5cec\", penwidth=3"
        } else {
            "color=\"#aaaaaa\""
        };
        output.push_str(&format!("  {} -- {} [{}];\n", ids[&a], ids[&b], style));
    }
    output.push_str("}\n");
    output
}

// quoted DOT ids only treat `\` and `"` specially
fn escape_label<V: Display>(v: &V) -> String {
    v.to_string().replace('\\', "\\\\").replace('"', "\\\"")
}

/// Writes the graph with its highlighted route to a file in DOT format.
pub fn to_dot_file<V: Vertex + Display, P: AsRef<Path>>(
    graph: &Graph<V>,
    route: &[V],
    path: P,
) -> std::io::Result<()> {
    std::fs::write(path, draw_graph(graph, route))
}
