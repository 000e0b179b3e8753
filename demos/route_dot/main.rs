/// Generates a random graph and draws it with the shortest route from 1 to 4 highlighted.
/// Usage: `cargo run --example route_dot | neato -Tsvg > route.svg`
use grafla::generate::random_graph;
use grafla::output::draw_graph;
use grafla::pathfinder::shortest_path;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(7);

    let graph = random_graph(6, 8, seed);
    let route = shortest_path(&1, &4, &graph);
    eprintln!("{}\nRoute: {:?}", graph, route);

    print!("{}", draw_graph(&graph, &route));
}
