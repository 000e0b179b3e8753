//! Ways of combining the complete paths found by the walk.

use super::dfs::PathSink;

/// Keeps every path, in discovery order.
#[derive(Default, Debug)]
pub(crate) struct AllPaths {
    pub paths: Vec<Vec<usize>>,
}

impl PathSink for AllPaths {
    fn found(&mut self, path: &[usize]) {
        self.paths.push(path.to_vec());
    }
}

/// Keeps the first path with the fewest vertices.
#[derive(Default, Debug)]
pub(crate) struct Shortest {
    pub best: Option<Vec<usize>>,
}

impl PathSink for Shortest {
    fn found(&mut self, path: &[usize]) {
        if self.best.as_ref().is_none_or(|best| path.len() < best.len()) {
            self.best = Some(path.to_vec());
        }
    }

    // extending the branch adds at least one vertex, ties never replace the best path
    fn should_prune(&self, len: usize) -> bool {
        self.best.as_ref().is_some_and(|best| len + 1 >= best.len())
    }
}

/// Keeps the first path with the most vertices.
#[derive(Default, Debug)]
pub(crate) struct Longest {
    pub best: Option<Vec<usize>>,
}

impl PathSink for Longest {
    fn found(&mut self, path: &[usize]) {
        if self.best.as_ref().is_none_or(|best| path.len() > best.len()) {
            self.best = Some(path.to_vec());
        }
    }
}
