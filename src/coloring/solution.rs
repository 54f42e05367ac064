//! Color assignments and the measures defined over them.

use super::graph::Graph;
use std::collections::{HashMap, HashSet};

/// A color per vertex: index = vertex id, value = color id.
pub type Coloring = Vec<usize>;

/// Assigns vertex `i` the color `i`.
///
/// Always a proper coloring, using exactly one color per vertex.
pub fn trivial_coloring(num_vertices: usize) -> Coloring {
    (0..num_vertices).collect()
}

/// Number of distinct colors in use.
pub fn color_count(coloring: &[usize]) -> usize {
    coloring.iter().collect::<HashSet<_>>().len()
}

/// Size of every color class, keyed by color.
pub fn color_class_sizes(coloring: &[usize]) -> HashMap<usize, usize> {
    let mut sizes = HashMap::new();
    for &color in coloring {
        *sizes.entry(color).or_insert(0) += 1;
    }
    sizes
}

/// Sum of squared color-class sizes. Larger means fewer, bigger classes.
pub fn class_square_sum(coloring: &[usize]) -> usize {
    color_class_sizes(coloring).values().map(|&n| n * n).sum()
}

/// Edges whose endpoints share a color.
pub fn conflicting_edges<'a>(
    graph: &'a Graph,
    coloring: &'a [usize],
) -> impl Iterator<Item = (usize, usize)> + 'a {
    graph
        .edges()
        .filter(move |&(u, v)| coloring[u] == coloring[v])
}

/// Returns `true` if `coloring` is a proper coloring of `graph`.
///
/// A coloring whose length differs from the vertex count is never proper.
pub fn verify(graph: &Graph, coloring: &[usize]) -> bool {
    coloring.len() == graph.num_vertices() && conflicting_edges(graph, coloring).next().is_none()
}

/// Relabels colors to `0..k` in order of first appearance.
pub fn normalize(coloring: &[usize]) -> Coloring {
    let mut labels = HashMap::new();
    coloring
        .iter()
        .map(|&color| {
            let next = labels.len();
            *labels.entry(color).or_insert(next)
        })
        .collect()
}
