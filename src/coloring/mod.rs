//! Graph coloring on top of the annealing engine.
//!
//! Supplies the pluggable pieces the engine needs:
//!
//! - [`GraphColoring`]: starts from the trivial coloring (vertex `i` gets
//!   color `i`) and scores colorings with a [`ColoringObjective`].
//! - [`RecolorVertex`]: recolors one vertex with a color already within
//!   the current color range and free among its neighbors.
//! - [`SwapColorClasses`]: exchanges two color labels.
//!
//! [`verify`] checks a result after the run; it plays no part in the search.
//! [`solve`] wires everything together for a [`Graph`].

mod graph;
mod moves;
mod problem;
mod solution;

pub use graph::Graph;
pub use moves::{free_colors, RecolorVertex, SwapColorClasses};
pub use problem::{solve, solve_mixed, ColoringObjective, ColoringOutcome, GraphColoring};
pub use solution::{
    class_square_sum, color_class_sizes, color_count, conflicting_edges, normalize,
    trivial_coloring, verify, Coloring,
};
