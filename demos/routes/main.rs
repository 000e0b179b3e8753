/// Builds and edits a small graph, then asks for routes between two vertices.
/// Run with `RUST_LOG=debug cargo run --example routes` to see ignored edits and search summaries.
use grafla::{Graph, pathfinder};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut graph = Graph::new();
    graph.add_edge('A', 'B');
    graph.add_edge('A', 'C');
    graph.add_edge('B', 'C');
    graph.add_edge('C', 'D');
    graph.add_edge('D', 'C'); // ignored, already there
    graph.add_edge('D', 'D'); // ignored, self-loop
    println!("Initial graph:\n{}", graph);

    for path in pathfinder::ranked_paths(&'A', &'D', &graph) {
        println!("Route: {:?}", path);
    }
    println!("Shortest: {:?}", pathfinder::shortest_path(&'A', &'D', &graph));
    println!("Longest: {:?}", pathfinder::longest_path(&'A', &'D', &graph));

    graph.remove_edge(&'A', &'B');
    println!("\nAfter removing edge A-B:\n{}", graph);

    graph.remove_vertex(&'C');
    println!("\nAfter removing vertex C:\n{}", graph);
    println!("Routes A -> D: {:?}", pathfinder::all_paths(&'A', &'D', &graph));
}
