use fixedbitset::FixedBitSet;

use crate::graph::Graph;

/// Every simple path from `s` to `t`, found by trying every ordering of distinct vertices and
/// keeping those whose consecutive pairs are all edges. Slow on purpose, small graphs only.
pub(crate) fn brute_force_paths(g: &Graph<u32>, s: u32, t: u32) -> Vec<Vec<u32>> {
    let vertices = g.vertices();
    let Some(s_pos) = vertices.iter().position(|&v| v == s) else {
        return if s == t { vec![vec![s]] } else { Vec::new() };
    };

    let mut used = FixedBitSet::with_capacity(vertices.len());
    used.insert(s_pos);
    let mut sequence = vec![s];
    let mut out = Vec::new();
    arrange(g, t, &vertices, &mut sequence, &mut used, &mut out);
    out
}

fn arrange(
    g: &Graph<u32>,
    t: u32,
    vertices: &[u32],
    sequence: &mut Vec<u32>,
    used: &mut FixedBitSet,
    out: &mut Vec<Vec<u32>>,
) {
    if sequence.last() == Some(&t) {
        if sequence.windows(2).all(|w| g.contains_edge(&w[0], &w[1])) {
            out.push(sequence.clone());
        }
        return;
    }

    for (i, &v) in vertices.iter().enumerate() {
        if used.contains(i) {
            continue;
        }
        used.insert(i);
        sequence.push(v);
        arrange(g, t, vertices, sequence, used, out);
        sequence.pop();
        used.set(i, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle() {
        let g = Graph::from_edges([(0, 1), (1, 2), (2, 0)]);
        let mut paths = brute_force_paths(&g, 0, 2);
        paths.sort();
        assert_eq!(paths, vec![vec![0, 1, 2], vec![0, 2]]);
        assert_eq!(brute_force_paths(&g, 1, 1), vec![vec![1]]);
        assert_eq!(brute_force_paths(&g, 5, 5), vec![vec![5]]);
        assert!(brute_force_paths(&g, 5, 1).is_empty());
    }
}
