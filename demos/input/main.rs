use grafla::{Graph, from_file, pathfinder};

fn main() {
    let graph: Graph<String> = match from_file("assets/scenario_a.graph") {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    println!("Number of vertices: {}", graph.vertex_count());
    println!("Number of edges: {}", graph.edge_count());

    let (start, target) = ("A".to_string(), "Z".to_string());
    for path in pathfinder::all_paths(&start, &target, &graph) {
        println!("Route: {}", path.join(" -> "));
    }
}
