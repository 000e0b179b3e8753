/// Example of drawing every branch the depth-first route search tries.
/// I use it with `cargo run --example search_tree | dot -Tsvg > search_tree.svg`
use grafla::debugging::draw_search_tree;
use grafla::{Graph, SearchOptions};

fn main() {
    // 0 -- 1
    // |    |
    // 3 -- 2 -- 4
    let graph = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (2, 4)]);

    match draw_search_tree(&0, &4, &graph, &SearchOptions::default()) {
        Ok(dot) => print!("{}", dot),
        Err(err) => eprintln!("{}", err),
    }
}
