//! Building blocks shared by the route searches in [`crate::pathfinder`].
//!
//! A search interns the part of the adjacency view reachable from the start vertex into dense
//! indices ([`compact`]), then walks it depth-first on an explicit frame stack ([`dfs`]). What to
//! keep from the complete paths is decided by a [`dfs::PathSink`] ([`collect`]).

pub(crate) mod collect;
pub(crate) mod compact;
pub(crate) mod dfs;

pub mod options;

use std::hash::Hash;

use crate::adjacency::AdjacencyView;
use crate::error::SearchError;
use compact::CompactAdjacency;
use dfs::PathSink;
use options::SearchOptions;

/// One prepared start/target query over an adjacency view.
pub(crate) struct Search<'a, V> {
    graph: CompactAdjacency<'a, V>,
    target: Option<usize>,
}

impl<'a, V: Hash + Eq> Search<'a, V> {
    pub fn new<A: AdjacencyView<V> + ?Sized>(start: &'a V, target: &V, adjacency: &'a A) -> Self {
        let graph = CompactAdjacency::reachable_from(start, adjacency);
        let target = graph.index_of(target);
        Self { graph, target }
    }

    /// False when no branch can ever reach the target.
    pub fn target_reachable(&self) -> bool {
        self.target.is_some()
    }

    /// Number of interned vertices, i.e. vertices reachable from the start.
    pub fn explored(&self) -> usize {
        self.graph.len()
    }

    pub fn label(&self, idx: usize) -> &'a V {
        self.graph.labels[idx]
    }

    pub fn run<S: PathSink>(&self, options: &SearchOptions, sink: &mut S) -> Result<(), SearchError> {
        dfs::run(compact::START, self.target, &self.graph, options, sink)
    }
}

impl<V: Hash + Eq + Clone> Search<'_, V> {
    /// Maps interned indices back to vertex identifiers.
    pub fn to_vertices(&self, path: &[usize]) -> Vec<V> {
        path.iter().map(|&i| self.label(i).clone()).collect()
    }
}
