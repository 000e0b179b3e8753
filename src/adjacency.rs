use std::collections::BTreeMap;
use std::hash::{BuildHasher, Hash};

use crate::graph::Graph;
use crate::types::Vertex;

/// Read-only mapping from a vertex to its neighbor sequence.
///
/// This is everything the path searches need. `None` means the vertex has no entry at all,
/// which a search treats the same as "no way forward from here".
pub trait AdjacencyView<V> {
    fn neighbors_of(&self, v: &V) -> Option<&[V]>;
}

impl<V: Vertex> AdjacencyView<V> for Graph<V> {
    fn neighbors_of(&self, v: &V) -> Option<&[V]> {
        self.neighbor_slice(v)
    }
}

impl<V: Hash + Eq, S: BuildHasher> AdjacencyView<V> for indexmap::IndexMap<V, Vec<V>, S> {
    fn neighbors_of(&self, v: &V) -> Option<&[V]> {
        self.get(v).map(Vec::as_slice)
    }
}

impl<V: Hash + Eq, S: BuildHasher> AdjacencyView<V> for hashbrown::HashMap<V, Vec<V>, S> {
    fn neighbors_of(&self, v: &V) -> Option<&[V]> {
        self.get(v).map(Vec::as_slice)
    }
}

impl<V: Hash + Eq, S: BuildHasher> AdjacencyView<V> for std::collections::HashMap<V, Vec<V>, S> {
    fn neighbors_of(&self, v: &V) -> Option<&[V]> {
        self.get(v).map(Vec::as_slice)
    }
}

impl<V: Ord> AdjacencyView<V> for BTreeMap<V, Vec<V>> {
    fn neighbors_of(&self, v: &V) -> Option<&[V]> {
        self.get(v).map(Vec::as_slice)
    }
}

impl<V, A: AdjacencyView<V> + ?Sized> AdjacencyView<V> for &A {
    fn neighbors_of(&self, v: &V) -> Option<&[V]> {
        (**self).neighbors_of(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_neighbor<A: AdjacencyView<u32>>(adj: &A, v: u32) -> Option<u32> {
        adj.neighbors_of(&v).and_then(|n| n.first().copied())
    }

    #[test]
    fn test_every_map_agrees_with_graph() {
        let g = Graph::from_edges([(1, 2), (1, 3)]);
        let std_map: std::collections::HashMap<u32, Vec<u32>> =
            g.adjacency().into_iter().collect();
        let brown: hashbrown::HashMap<u32, Vec<u32>> = g.adjacency().into_iter().collect();
        let btree: BTreeMap<u32, Vec<u32>> = g.adjacency().into_iter().collect();

        assert_eq!(first_neighbor(&g, 1), Some(2));
        assert_eq!(first_neighbor(&g.adjacency(), 1), Some(2));
        assert_eq!(first_neighbor(&std_map, 1), Some(2));
        assert_eq!(first_neighbor(&brown, 1), Some(2));
        assert_eq!(first_neighbor(&btree, 1), Some(2));
        assert_eq!(first_neighbor(&&g, 3), Some(1));
        assert_eq!(first_neighbor(&g, 9), None);
    }
}
