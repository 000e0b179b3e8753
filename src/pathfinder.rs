//! Route finding between two vertices over an adjacency view.
//!
//! All searches run the same exhaustive depth-first walk over simple paths (no vertex repeats),
//! branching in the order the view lists neighbors. They differ only in what they keep:
//!
//! - [`all_paths`]: every path, in discovery order,
//! - [`shortest_path`]: the first path with the fewest vertices,
//! - [`longest_path`]: the first path with the most vertices.
//!
//! A path always begins with `start` and ends with `target`. When `start == target` the answer
//! is the single-vertex path `[start]`, even if the vertex is unknown. An unreachable target
//! gives an empty result.
//!
//! The walk is exponential in the number of simple paths. It is meant for small, hand-edited
//! graphs; for anything bigger use the `*_with` variants and bound it with [`SearchOptions`].
//!
//! ```
//! use grafla::{Graph, pathfinder};
//!
//! let g = Graph::from_edges([("A", "B"), ("B", "Z"), ("A", "Z")]);
//! assert_eq!(pathfinder::shortest_path(&"A", &"Z", &g), vec!["A", "Z"]);
//! assert_eq!(pathfinder::longest_path(&"A", &"Z", &g), vec!["A", "B", "Z"]);
//! ```

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::adjacency::AdjacencyView;
use crate::error::SearchError;
use crate::search_blocks::Search;
use crate::search_blocks::collect::{AllPaths, Longest, Shortest};
use crate::search_blocks::dfs::PathSink;
use crate::search_blocks::options::SearchOptions;

/// Every simple path from `start` to `target`.
pub fn all_paths<V, A>(start: &V, target: &V, adjacency: &A) -> Vec<Vec<V>>
where
    V: Clone + Eq + Hash + Debug,
    A: AdjacencyView<V> + ?Sized,
{
    unbounded(all_paths_with(start, target, adjacency, &SearchOptions::default()))
}

/// A path with the fewest vertices, empty if there is none.
///
/// Among equally short paths the one found first wins, so the answer depends on neighbor
/// order.
pub fn shortest_path<V, A>(start: &V, target: &V, adjacency: &A) -> Vec<V>
where
    V: Clone + Eq + Hash + Debug,
    A: AdjacencyView<V> + ?Sized,
{
    unbounded(shortest_path_with(start, target, adjacency, &SearchOptions::default()))
}

/// A simple path with the most vertices, empty if there is none.
///
/// Every branch is explored to the end. Ties go to the path found first.
pub fn longest_path<V, A>(start: &V, target: &V, adjacency: &A) -> Vec<V>
where
    V: Clone + Eq + Hash + Debug,
    A: AdjacencyView<V> + ?Sized,
{
    unbounded(longest_path_with(start, target, adjacency, &SearchOptions::default()))
}

/// Every simple path, shortest first. Paths of equal length keep discovery order.
pub fn ranked_paths<V, A>(start: &V, target: &V, adjacency: &A) -> Vec<Vec<V>>
where
    V: Clone + Eq + Hash + Debug,
    A: AdjacencyView<V> + ?Sized,
{
    let mut paths = all_paths(start, target, adjacency);
    radsort::sort_by_key(&mut paths, |path| path.len());
    paths
}

/// [`all_paths`] with depth and cancellation limits.
pub fn all_paths_with<V, A>(
    start: &V,
    target: &V,
    adjacency: &A,
    options: &SearchOptions,
) -> Result<Vec<Vec<V>>, SearchError>
where
    V: Clone + Eq + Hash + Debug,
    A: AdjacencyView<V> + ?Sized,
{
    run_search("all_paths", start, target, adjacency, options, AllPaths::default(), |search, sink| {
        sink.paths.iter().map(|path| search.to_vertices(path)).collect()
    })
}

/// [`shortest_path`] with depth and cancellation limits.
pub fn shortest_path_with<V, A>(
    start: &V,
    target: &V,
    adjacency: &A,
    options: &SearchOptions,
) -> Result<Vec<V>, SearchError>
where
    V: Clone + Eq + Hash + Debug,
    A: AdjacencyView<V> + ?Sized,
{
    run_search("shortest_path", start, target, adjacency, options, Shortest::default(), |search, sink| {
        sink.best.map(|path| search.to_vertices(&path)).unwrap_or_default()
    })
}

/// [`longest_path`] with depth and cancellation limits.
pub fn longest_path_with<V, A>(
    start: &V,
    target: &V,
    adjacency: &A,
    options: &SearchOptions,
) -> Result<Vec<V>, SearchError>
where
    V: Clone + Eq + Hash + Debug,
    A: AdjacencyView<V> + ?Sized,
{
    run_search("longest_path", start, target, adjacency, options, Longest::default(), |search, sink| {
        sink.best.map(|path| search.to_vertices(&path)).unwrap_or_default()
    })
}

/// `finish` turns the sink into the answer. The answer's length is logged: the number of paths
/// for [`all_paths`], the number of vertices on the path otherwise.
fn run_search<V, A, S, T>(
    kind: &'static str,
    start: &V,
    target: &V,
    adjacency: &A,
    options: &SearchOptions,
    mut sink: S,
    finish: impl FnOnce(&Search<'_, V>, S) -> Vec<T>,
) -> Result<Vec<T>, SearchError>
where
    V: Clone + Eq + Hash + Debug,
    A: AdjacencyView<V> + ?Sized,
    S: PathSink,
{
    let search = Search::new(start, target, adjacency);
    if !search.target_reachable() {
        debug!(kind, start = ?start, target = ?target, explored = search.explored(), "target unreachable");
        return Ok(Vec::new());
    }

    if let Err(err) = search.run(options, &mut sink) {
        debug!(kind, start = ?start, target = ?target, %err, "search stopped");
        return Err(err);
    }

    let result = finish(&search, sink);
    debug!(
        kind,
        start = ?start,
        target = ?target,
        explored = search.explored(),
        result_len = result.len(),
        "search finished"
    );
    Ok(result)
}

fn unbounded<T>(result: Result<T, SearchError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => unreachable!("search without limits failed: {}", err),
    }
}
