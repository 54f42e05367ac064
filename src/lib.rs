//! Graph coloring by simulated annealing.
//!
//! The crate has two layers:
//!
//! - **Simulated Annealing ([`sa`])**: a domain-agnostic engine driving a
//!   cooling schedule, a fixed number of Metropolis trials per temperature,
//!   and best-solution tracking. Problems, move types and schedules are
//!   pluggable.
//! - **Graph coloring ([`coloring`])**: the adapter that plugs a
//!   graph's initial coloring, recolor move and color-count objective into
//!   the engine, plus a post-run validity check.
//!
//! Every run draws from one seeded random stream ([`random`]), so runs
//! with a fixed seed are reproducible.
//!
//! # Example
//!
//! ```
//! use u_coloring::coloring::{solve, ColoringObjective, Graph};
//! use u_coloring::sa::SaConfig;
//!
//! let g = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)])?;
//! let outcome = solve(&g, ColoringObjective::ColorCount, &SaConfig::reference().with_seed(3))?;
//! assert!(outcome.valid);
//! assert_eq!(outcome.colors_used, 3);
//! # Ok::<(), u_coloring::Error>(())
//! ```

pub mod coloring;
mod error;
pub mod random;
pub mod sa;

pub use error::{ConfigError, Error, GraphError};
