//! Pictures of what a search actually does.

use std::fmt::Display;
use std::hash::Hash;

use dot::{Edges, GraphWalk, Labeller, Nodes};

use crate::adjacency::AdjacencyView;
use crate::error::SearchError;
use crate::search_blocks::Search;
use crate::search_blocks::dfs::PathSink;
use crate::search_blocks::options::SearchOptions;

type Node = usize;

#[derive(Debug, Clone)]
struct Edge {
    source: Node,
    target: Node,
}

/// One node per branch prefix the walk expanded.
#[derive(Debug, Default)]
struct TreeRecorder {
    vertex: Vec<usize>,
    hit: Vec<bool>,
    edges: Vec<Edge>,
    last_at_depth: Vec<Node>, // preorder: the parent of a prefix is the last one recorded one level up
}

impl PathSink for TreeRecorder {
    fn found(&mut self, _path: &[usize]) {
        if let Some(hit) = self.hit.last_mut() {
            *hit = true;
        }
    }

    fn entered(&mut self, path: &[usize]) {
        let depth = path.len() - 1;
        let node = self.vertex.len();
        if depth > 0 {
            self.edges.push(Edge {
                source: self.last_at_depth[depth - 1],
                target: node,
            });
        }
        self.last_at_depth.truncate(depth);
        self.last_at_depth.push(node);
        self.vertex.push(path[depth]);
        self.hit.push(false);
    }
}

struct SearchTree {
    labels: Vec<String>,
    edges: Vec<Edge>,
}

impl<'a> Labeller<'a, Node, Edge> for SearchTree {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("SearchTree").unwrap()
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        dot::LabelText::label(self.labels[*n].clone())
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for SearchTree {
    fn nodes(&self) -> Nodes<'_, Node> {
        (0..self.labels.len()).collect()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.source
    }

    fn target(&self, e: &Edge) -> Node {
        e.target
    }
}

/// Returns the depth-first exploration tree of a search in DOT format.
///
/// Every node is one branch the walk expanded, labelled with the vertex that ended it; children
/// appear in the order they were tried. Branches that reached `target` get a `(target)` suffix.
///
/// Use returned string with `dot` not `neato`.
pub fn draw_search_tree<V, A>(
    start: &V,
    target: &V,
    adjacency: &A,
    options: &SearchOptions,
) -> Result<String, SearchError>
where
    V: Hash + Eq + Display,
    A: AdjacencyView<V> + ?Sized,
{
    let search = Search::new(start, target, adjacency);
    let mut recorder = TreeRecorder::default();
    search.run(options, &mut recorder)?;

    let labels = recorder
        .vertex
        .iter()
        .zip(&recorder.hit)
        .map(|(&v, &hit)| {
            if hit {
                format!("{} (target)", search.label(v))
            } else {
                search.label(v).to_string()
            }
        })
        .collect();
    let tree = SearchTree {
        labels,
        edges: recorder.edges,
    };

    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&tree, &mut buffer).unwrap();
    Ok(String::from_utf8(buffer.into_inner()).unwrap())
}
