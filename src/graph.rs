use hashbrown::HashMap;
use indexmap::{IndexMap, IndexSet};
use petgraph::visit::EdgeRef;
use tracing::{debug, trace};

use crate::types::{Adjacency, Edge, Mutation, RejectReason, UnGraph, Vertex, canonical};

/// Undirected simple graph keyed by vertex identifiers.
///
/// Keeps two views in sync: the adjacency map (neighbors in edge insertion order) and the set
/// of canonical `(min, max)` edges. Every edge `(a, b)` has `b` exactly once in the neighbors of
/// `a` and vice versa, every endpoint is a key of the adjacency map and self-loops never get in.
///
/// Queries hand out copies, so callers cannot break those invariants.
#[derive(Clone, Debug)]
pub struct Graph<V> {
    adjacency: IndexMap<V, Vec<V>>,
    edges: IndexSet<Edge<V>>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
            edges: IndexSet::new(),
        }
    }
}

impl<V: Vertex> Graph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph by feeding every pair through [`Graph::add_edge`].
    pub fn from_edges<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }

    /// Inserts `v` with no neighbors.
    pub fn add_vertex(&mut self, v: V) -> Mutation {
        if self.adjacency.contains_key(&v) {
            debug!(vertex = ?v, "vertex already exists");
            return Mutation::Rejected(RejectReason::DuplicateVertex);
        }
        trace!(vertex = ?v, "vertex added");
        self.adjacency.insert(v, Vec::new());
        Mutation::Applied
    }

    /// Removes `v` together with every edge touching it.
    pub fn remove_vertex(&mut self, v: &V) -> Mutation {
        let Some(neighbors) = self.adjacency.shift_remove(v) else {
            debug!(vertex = ?v, "cannot remove missing vertex");
            return Mutation::Rejected(RejectReason::VertexNotFound);
        };

        for neighbor in neighbors {
            if let Some(list) = self.adjacency.get_mut(&neighbor) {
                remove_first(list, v);
            }
            self.edges.shift_remove(&canonical(v.clone(), neighbor));
        }
        trace!(vertex = ?v, "vertex removed");
        Mutation::Applied
    }

    /// Connects `a` and `b`, creating missing endpoints first.
    pub fn add_edge(&mut self, a: V, b: V) -> Mutation {
        if a == b {
            debug!(vertex = ?a, "rejected self-loop");
            return Mutation::Rejected(RejectReason::SelfLoop);
        }

        let edge = canonical(a.clone(), b.clone());
        if self.edges.contains(&edge) {
            debug!(a = ?edge.0, b = ?edge.1, "edge already exists");
            return Mutation::Rejected(RejectReason::DuplicateEdge);
        }

        self.adjacency.entry(a.clone()).or_default().push(b.clone());
        self.adjacency.entry(b).or_default().push(a);
        trace!(a = ?edge.0, b = ?edge.1, "edge added");
        self.edges.insert(edge);
        Mutation::Applied
    }

    /// Disconnects `a` and `b`, both vertices stay.
    pub fn remove_edge(&mut self, a: &V, b: &V) -> Mutation {
        if !self.adjacency.contains_key(a) || !self.adjacency.contains_key(b) {
            debug!(a = ?a, b = ?b, "cannot remove edge, endpoint missing");
            return Mutation::Rejected(RejectReason::VertexNotFound);
        }

        let edge = canonical(a.clone(), b.clone());
        if !self.edges.shift_remove(&edge) {
            debug!(a = ?a, b = ?b, "cannot remove missing edge");
            return Mutation::Rejected(RejectReason::EdgeNotFound);
        }

        if let Some(list) = self.adjacency.get_mut(a) {
            remove_first(list, b);
        }
        if let Some(list) = self.adjacency.get_mut(b) {
            remove_first(list, a);
        }
        trace!(a = ?edge.0, b = ?edge.1, "edge removed");
        Mutation::Applied
    }

    /// Drops every vertex and edge.
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.edges.clear();
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// All edges as canonical `(min, max)` pairs, in insertion order.
    pub fn edges(&self) -> Vec<Edge<V>> {
        self.edges.iter().cloned().collect()
    }

    /// Neighbors of `v`, empty if `v` is not in the graph.
    pub fn neighbors(&self, v: &V) -> Vec<V> {
        self.adjacency.get(v).cloned().unwrap_or_default()
    }

    /// Copy of the whole adjacency map, isolated vertices included.
    pub fn adjacency(&self) -> Adjacency<V> {
        self.adjacency.clone()
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Whether `a` and `b` are directly connected, in either order.
    pub fn contains_edge(&self, a: &V, b: &V) -> bool {
        self.edges.contains(&canonical(a.clone(), b.clone()))
    }

    pub fn degree(&self, v: &V) -> usize {
        self.adjacency.get(v).map_or(0, Vec::len)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Same as [`Graph::vertex_count`].
    pub fn len(&self) -> usize {
        self.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Neighbor list without copying, used by the search adapters.
    pub(crate) fn neighbor_slice(&self, v: &V) -> Option<&[V]> {
        self.adjacency.get(v).map(Vec::as_slice)
    }

    /// Converts to petgraph's representation.
    ///
    /// Node indices follow vertex insertion order, edges follow edge insertion order.
    pub fn to_petgraph(&self) -> UnGraph<V> {
        let mut graph = UnGraph::with_capacity(self.vertex_count(), self.edge_count());
        let mut index = HashMap::with_capacity(self.vertex_count());
        for v in self.adjacency.keys() {
            index.insert(v, graph.add_node(v.clone()));
        }
        for (a, b) in &self.edges {
            graph.add_edge(index[a], index[b], ());
        }
        graph
    }

    /// Reads a petgraph graph whose node weights are vertex identifiers.
    ///
    /// Parallel edges and self-loops are dropped by the usual [`Graph::add_edge`] rules.
    pub fn from_petgraph<E>(graph: &petgraph::graph::UnGraph<V, E>) -> Self {
        let mut out = Self::new();
        for v in graph.node_weights() {
            out.add_vertex(v.clone());
        }
        for edge in graph.edge_references() {
            out.add_edge(graph[edge.source()].clone(), graph[edge.target()].clone());
        }
        out
    }
}

fn remove_first<V: PartialEq>(list: &mut Vec<V>, v: &V) {
    if let Some(pos) = list.iter().position(|x| x == v) {
        list.remove(pos);
    }
}

impl<V: Vertex> Extend<(V, V)> for Graph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        for (a, b) in iter {
            self.add_edge(a, b);
        }
    }
}

impl<V: Vertex> FromIterator<(V, V)> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<V: Vertex> std::fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vertices: {:?}\nEdges: {:?}", self.vertices(), self.edges())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(g: &Graph<&'static str>) {
        for v in g.vertices() {
            for u in g.neighbors(&v) {
                assert!(g.neighbors(&u).contains(&v), "{} -> {} is one-sided", v, u);
                assert!(g.contains_edge(&u, &v));
            }
        }
        for (a, b) in g.edges() {
            assert!(a < b);
            assert_eq!(g.neighbors(&a).iter().filter(|x| **x == b).count(), 1);
            assert_eq!(g.neighbors(&b).iter().filter(|x| **x == a).count(), 1);
        }
    }

    #[test]
    fn test_add_edge_creates_vertices() {
        let mut g = Graph::new();
        assert_eq!(g.add_edge("B", "A"), Mutation::Applied);
        assert_eq!(g.vertices(), vec!["B", "A"]);
        assert_eq!(g.edges(), vec![("A", "B")]);
        assert_eq!(g.neighbors(&"A"), vec!["B"]);
        assert_consistent(&g);
    }

    #[test]
    fn test_add_edge_is_idempotent() {
        let mut g = Graph::new();
        g.add_edge("A", "B");
        let before = g.adjacency();
        assert_eq!(
            g.add_edge("B", "A"),
            Mutation::Rejected(RejectReason::DuplicateEdge)
        );
        assert_eq!(g.adjacency(), before);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_self_loop_rejected_without_state_change() {
        let mut g = Graph::new();
        assert_eq!(g.add_edge("A", "A"), Mutation::Rejected(RejectReason::SelfLoop));
        assert!(g.is_empty());
    }

    #[test]
    fn test_add_vertex_twice() {
        let mut g = Graph::new();
        assert!(g.add_vertex(1).is_applied());
        assert_eq!(g.add_vertex(1), Mutation::Rejected(RejectReason::DuplicateVertex));
        assert_eq!(g.vertices(), vec![1]);
        assert!(g.neighbors(&1).is_empty());
    }

    #[test]
    fn test_len_counts_vertices() {
        let mut g = Graph::new();
        assert_eq!(g.len(), 0);
        g.add_edge(1, 2);
        g.add_vertex(3);
        assert_eq!(g.len(), 3);
        assert_eq!(g.len(), g.vertex_count());
        g.remove_vertex(&2);
        assert_eq!(g.len(), 2);
        assert!(!g.is_empty());
    }

    #[test]
    fn test_remove_vertex_cascades() {
        // Scenario C
        let mut g = Graph::new();
        g.add_edge("A", "B");
        g.add_edge("B", "C");
        g.add_edge("A", "C");

        assert!(g.remove_vertex(&"B").is_applied());
        assert_eq!(g.edges(), vec![("A", "C")]);
        assert_eq!(g.neighbors(&"A"), vec!["C"]);
        assert_eq!(g.neighbors(&"C"), vec!["A"]);
        assert_eq!(g.vertices(), vec!["A", "C"]);
        assert_consistent(&g);
    }

    #[test]
    fn test_remove_missing_vertex() {
        let mut g: Graph<u32> = Graph::new();
        assert_eq!(
            g.remove_vertex(&3),
            Mutation::Rejected(RejectReason::VertexNotFound)
        );
    }

    #[test]
    fn test_remove_edge() {
        let mut g = Graph::new();
        g.add_edge("A", "B");
        g.add_edge("A", "C");
        g.add_edge("B", "C");
        g.add_edge("C", "D");

        assert!(g.remove_edge(&"B", &"A").is_applied());
        assert_eq!(g.edges(), vec![("A", "C"), ("B", "C"), ("C", "D")]);
        assert_eq!(g.neighbors(&"A"), vec!["C"]);
        assert_eq!(g.neighbors(&"B"), vec!["C"]);
        assert!(g.contains_vertex(&"A") && g.contains_vertex(&"B"));

        assert_eq!(
            g.remove_edge(&"A", &"B"),
            Mutation::Rejected(RejectReason::EdgeNotFound)
        );
        assert_eq!(
            g.remove_edge(&"A", &"Z"),
            Mutation::Rejected(RejectReason::VertexNotFound)
        );
        assert_consistent(&g);
    }

    #[test]
    fn test_original_walkthrough() {
        let mut g = Graph::new();
        g.add_edge("A", "B");
        g.add_edge("A", "C");
        g.add_edge("B", "C");
        g.add_edge("C", "D");
        g.remove_edge(&"A", &"B");
        g.remove_vertex(&"C");

        assert_eq!(g.vertices(), vec!["A", "B", "D"]);
        assert!(g.edges().is_empty());
        assert_eq!(g.degree(&"A"), 0);
        assert_eq!(g.to_string(), "Vertices: [\"A\", \"B\", \"D\"]\nEdges: []");
    }

    #[test]
    fn test_snapshots_are_copies() {
        let mut g = Graph::new();
        g.add_edge(1, 2);
        let mut neighbors = g.neighbors(&1);
        neighbors.push(7);
        let mut adjacency = g.adjacency();
        adjacency.insert(9, vec![1]);
        assert_eq!(g.neighbors(&1), vec![2]);
        assert!(!g.contains_vertex(&9));
    }

    #[test]
    fn test_clear() {
        let mut g: Graph<u32> = [(1, 2), (2, 3)].into_iter().collect();
        assert_eq!(g.edge_count(), 2);
        g.clear();
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_petgraph_roundtrip_keeps_order() {
        let g: Graph<u32> = Graph::from_edges([(3, 1), (1, 2), (2, 3)]);
        let pg = g.to_petgraph();
        assert_eq!(pg.node_count(), 3);
        assert_eq!(pg.edge_count(), 3);
        assert_eq!(pg.node_weights().copied().collect::<Vec<_>>(), vec![3, 1, 2]);

        let back = Graph::from_petgraph(&pg);
        assert_eq!(back.vertices(), g.vertices());
        assert_eq!(back.edges(), g.edges());
    }

    #[test]
    fn test_from_petgraph_drops_loops_and_parallel_edges() {
        let mut pg = petgraph::graph::UnGraph::<u32, &str>::new_undirected();
        let a = pg.add_node(0);
        let b = pg.add_node(1);
        pg.add_edge(a, b, "x");
        pg.add_edge(b, a, "y");
        pg.add_edge(a, a, "z");

        let g = Graph::from_petgraph(&pg);
        assert_eq!(g.edges(), vec![(0, 1)]);
        assert_eq!(g.neighbors(&0), vec![1]);
    }
}
