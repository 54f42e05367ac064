//! Neighborhoods over colorings.

use super::graph::Graph;
use super::solution::Coloring;
use crate::random::SaRng;
use crate::sa::Neighborhood;
use rand::Rng;

/// Sorted, deduplicated colors of `vertex`'s neighbors.
///
/// `None` when `coloring` does not cover every vertex of `graph`.
fn neighbor_colors(graph: &Graph, coloring: &[usize], vertex: usize) -> Option<Vec<usize>> {
    if coloring.len() != graph.num_vertices() || vertex >= coloring.len() {
        return None;
    }
    let mut used: Vec<usize> = graph
        .neighbors(vertex)
        .iter()
        .map(|&neighbor| coloring[neighbor])
        .collect();
    used.sort_unstable();
    used.dedup();
    Some(used)
}

/// Colors in `0..=max(coloring)` that no neighbor of `vertex` uses.
///
/// The result may include the vertex's own color. It is empty when
/// `coloring` does not match the vertex count of `graph`. The whole color
/// range is enumerated; [`RecolorVertex`] samples from it without doing so.
pub fn free_colors(graph: &Graph, coloring: &[usize], vertex: usize) -> Vec<usize> {
    let (Some(&max_color), Some(used)) = (
        coloring.iter().max(),
        neighbor_colors(graph, coloring, vertex),
    ) else {
        return Vec::new();
    };
    (0..=max_color)
        .filter(|color| used.binary_search(color).is_err())
        .collect()
}

/// The `rank`-th color (zero-based, ascending) not in the sorted list `excluded`.
fn nth_color_outside(excluded: &[usize], rank: usize) -> usize {
    let mut color = rank;
    for &taken in excluded {
        if taken > color {
            break;
        }
        color += 1;
    }
    color
}

/// Recolors one random vertex with a color free among its neighbors.
///
/// Candidate colors are bounded by the largest color already in the
/// coloring, so the move never raises the maximum color id. Starting from a
/// proper coloring, every proposal is again proper. The input is returned
/// unchanged when the chosen vertex has no alternative color, or when the
/// coloring's length differs from the graph's vertex count.
///
/// Work is proportional to the chosen vertex's degree, whatever the color
/// ids in use.
#[derive(Debug, Clone, Copy)]
pub struct RecolorVertex<'g> {
    graph: &'g Graph,
}

impl<'g> RecolorVertex<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }
}

impl Neighborhood<Coloring> for RecolorVertex<'_> {
    fn name(&self) -> &str {
        "recolor-vertex"
    }

    fn propose(&self, coloring: &Coloring, rng: &mut SaRng) -> Coloring {
        let mut next = coloring.clone();
        let Some(&max_color) = coloring.iter().max() else {
            return next;
        };
        if coloring.len() != self.graph.num_vertices() {
            return next;
        }

        let vertex = rng.random_range(0..coloring.len());
        let current = coloring[vertex];
        let Some(mut excluded) = neighbor_colors(self.graph, coloring, vertex) else {
            return next;
        };
        if let Err(at) = excluded.binary_search(&current) {
            excluded.insert(at, current);
        }

        // Every excluded color lies in 0..=max_color, and `current` is one of
        // them, so this counts the candidates without overflowing.
        let candidates = max_color - (excluded.len() - 1);
        if candidates > 0 {
            next[vertex] = nth_color_outside(&excluded, rng.random_range(0..candidates));
        }
        next
    }
}

/// Exchanges the labels of two colors in use.
///
/// Cost-neutral under both coloring objectives and keeps a proper coloring
/// proper; it reshuffles which classes sit under the maximum color id that
/// bounds [`RecolorVertex`]. Returns the input unchanged when fewer than two
/// colors are in use.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapColorClasses;

impl Neighborhood<Coloring> for SwapColorClasses {
    fn name(&self) -> &str {
        "swap-color-classes"
    }

    fn propose(&self, coloring: &Coloring, rng: &mut SaRng) -> Coloring {
        let mut colors: Vec<usize> = coloring.clone();
        colors.sort_unstable();
        colors.dedup();
        if colors.len() < 2 {
            return coloring.clone();
        }

        let a = rng.random_range(0..colors.len());
        let mut b = rng.random_range(0..colors.len() - 1);
        if b >= a {
            b += 1;
        }
        let (a, b) = (colors[a], colors[b]);

        coloring
            .iter()
            .map(|&color| match color {
                c if c == a => b,
                c if c == b => a,
                c => c,
            })
            .collect()
    }
}
