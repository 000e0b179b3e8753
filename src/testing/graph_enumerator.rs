use crate::graph::Graph;

/// Yields every simple graph on the vertices `0..n`, one per subset of the possible edges.
///
/// All vertices are added before any edge, so isolated ones are present too.
pub(crate) struct GraphEnumeratorState {
    pub n: usize,
    pub mask: usize,
    pub last_mask: usize,
}

impl GraphEnumeratorState {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            mask: 0,
            last_mask: 1 << (n * n.saturating_sub(1) / 2),
        }
    }
}

impl Iterator for GraphEnumeratorState {
    type Item = Graph<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let mut graph = Graph::new();
        for i in 0..self.n {
            graph.add_vertex(i as u32);
        }

        let mut check = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.mask & (1 << check) != 0 {
                    graph.add_edge(i as u32, j as u32);
                }
                check += 1;
            }
        }

        self.mask += 1;
        Some(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(GraphEnumeratorState::new(1).count(), 1);
        assert_eq!(GraphEnumeratorState::new(3).count(), 8);

        let last = GraphEnumeratorState::new(4).last().unwrap();
        assert_eq!(last.vertex_count(), 4);
        assert_eq!(last.edge_count(), 6);
    }
}
