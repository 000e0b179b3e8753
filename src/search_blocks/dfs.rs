use fixedbitset::FixedBitSet;

use super::compact::CompactAdjacency;
use super::options::SearchOptions;
use crate::error::SearchError;

/// Receives what the depth-first walk produces.
pub(crate) trait PathSink {
    /// `path` starts at the start vertex and ends at the target.
    fn found(&mut self, path: &[usize]);

    /// Asked before expanding a branch of `len` vertices that has not reached the target.
    fn should_prune(&self, _len: usize) -> bool {
        false
    }

    /// Called every time a vertex is appended to the current branch.
    fn entered(&mut self, _path: &[usize]) {}
}

/// Walks every simple path from `start`, reporting those that end in `target`.
///
/// With `target == None` the walk still explores everything but never reports a path.
///
/// The branch lives on an explicit frame stack, so the depth of a branch is bounded by the
/// number of vertices and never by the thread's stack.
pub(crate) fn run<V, S: PathSink>(
    start: usize,
    target: Option<usize>,
    graph: &CompactAdjacency<'_, V>,
    options: &SearchOptions,
    sink: &mut S,
) -> Result<(), SearchError> {
    let mut path = Vec::with_capacity(graph.labels.len());
    let mut on_path = FixedBitSet::with_capacity(graph.labels.len());
    // (vertex, position of the next neighbor to try)
    let mut frames: Vec<(usize, usize)> = Vec::with_capacity(graph.labels.len());

    if enter(start, target, graph, options, &mut path, &mut on_path, sink)? {
        frames.push((start, 0));
    } else {
        leave(start, &mut path, &mut on_path);
    }

    while let Some(frame) = frames.last_mut() {
        let (u, next) = *frame;
        let Some(&v) = graph.adj[u].get(next) else {
            frames.pop();
            leave(u, &mut path, &mut on_path);
            continue;
        };
        frame.1 += 1;

        // simple paths only, a vertex never repeats on a branch
        if on_path.contains(v) {
            continue;
        }
        if enter(v, target, graph, options, &mut path, &mut on_path, sink)? {
            frames.push((v, 0));
        } else {
            leave(v, &mut path, &mut on_path);
        }
    }

    Ok(())
}

/// Appends `u` to the branch. Returns whether its neighbors should be expanded.
fn enter<V, S: PathSink>(
    u: usize,
    target: Option<usize>,
    graph: &CompactAdjacency<'_, V>,
    options: &SearchOptions,
    path: &mut Vec<usize>,
    on_path: &mut FixedBitSet,
    sink: &mut S,
) -> Result<bool, SearchError> {
    if options.is_cancelled() {
        return Err(SearchError::Cancelled);
    }

    path.push(u);
    if let Some(limit) = options.max_depth {
        if path.len() > limit {
            return Err(SearchError::DepthLimitExceeded { limit });
        }
    }
    on_path.insert(u);
    sink.entered(path);

    if Some(u) == target {
        sink.found(path);
        return Ok(false);
    }
    Ok(graph.has_entry.contains(u) && !sink.should_prune(path.len()))
}

// backtrack so the next sibling starts from the same prefix
fn leave(u: usize, path: &mut Vec<usize>, on_path: &mut FixedBitSet) {
    on_path.set(u, false);
    path.pop();
}
