use std::collections::VecDeque;
use std::hash::Hash;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;

use crate::adjacency::AdjacencyView;

/// Index of the start vertex in every [`CompactAdjacency`].
pub(crate) const START: usize = 0;

/// Dense copy of the component around the start vertex.
///
/// Vertices get indices in breadth-first discovery order, the start is always index 0.
/// Neighbor order is preserved, so a walk over this copy visits branches in exactly the order
/// the adjacency view lists them.
#[derive(Debug)]
pub(crate) struct CompactAdjacency<'a, V> {
    pub labels: Vec<&'a V>,
    pub adj: Vec<Vec<usize>>,        // neighbors as indices into `labels`
    pub has_entry: FixedBitSet,      // vertex is a key of the adjacency view
    index: HashMap<&'a V, usize>,
}

impl<'a, V: Hash + Eq> CompactAdjacency<'a, V> {
    pub fn reachable_from<A: AdjacencyView<V> + ?Sized>(start: &'a V, adjacency: &'a A) -> Self {
        let mut compact = Self {
            labels: vec![start],
            adj: vec![Vec::new()],
            has_entry: FixedBitSet::with_capacity(1),
            index: HashMap::new(),
        };
        compact.index.insert(start, START);

        let mut queue = VecDeque::from([START]);
        while let Some(u) = queue.pop_front() {
            // no entry: the vertex is a dead end, not an error
            let Some(neighbors) = adjacency.neighbors_of(compact.labels[u]) else {
                continue;
            };
            compact.has_entry.grow(u + 1);
            compact.has_entry.insert(u);

            for n in neighbors {
                let idx = match compact.index.get(n) {
                    Some(&idx) => idx,
                    None => {
                        let idx = compact.labels.len();
                        compact.labels.push(n);
                        compact.adj.push(Vec::new());
                        compact.index.insert(n, idx);
                        queue.push_back(idx);
                        idx
                    }
                };
                compact.adj[u].push(idx);
            }
        }

        compact.has_entry.grow(compact.labels.len());
        compact
    }

    pub fn index_of(&self, v: &V) -> Option<usize> {
        self.index.get(v).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
}
