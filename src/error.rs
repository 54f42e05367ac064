//! Error types.
//!
//! Two families of errors exist, both detected before any annealing trial
//! runs:
//!
//! - [`ConfigError`]: invalid engine parameters (temperatures, repeats,
//!   cooling parameters, neighborhood set).
//! - [`GraphError`]: malformed graph input rejected by the coloring adapter.
//!
//! A correctly configured run has no failure path of its own.

use thiserror::Error;

/// Invalid annealing configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be positive and finite, got {value}")]
    NonPositiveTemperature { name: &'static str, value: f64 },

    #[error("min_temperature ({stop}) must be less than initial_temperature ({start})")]
    TemperatureOrder { start: f64, stop: f64 },

    #[error("iterations_per_temperature must be at least 1")]
    ZeroRepeats,

    #[error("geometric alpha must be in (0, 1), got {alpha}")]
    CoolingFactor { alpha: f64 },

    #[error("lundy-mees beta must be positive, got {beta}")]
    LundyMeesBeta { beta: f64 },

    #[error("linear cooling needs at least one step")]
    LinearSteps,

    #[error("at least one neighborhood must be supplied")]
    NoNeighborhoods,

    #[error("expected {expected} neighbor weights (one per neighborhood), got {got}")]
    NeighborWeightCount { expected: usize, got: usize },

    #[error("neighbor weight #{index} must be positive and finite, got {weight}")]
    NeighborWeight { index: usize, weight: f64 },

    #[error("neighbor weights must have a finite sum, got {total}")]
    NeighborWeightSum { total: f64 },
}

/// Malformed graph input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("adjacency matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("adjacency matrix is asymmetric at ({i}, {j})")]
    Asymmetric { i: usize, j: usize },

    #[error("self-loop on vertex {vertex} makes the graph uncolorable")]
    SelfLoop { vertex: usize },

    #[error("vertex {vertex} out of range for a graph with {num_vertices} vertices")]
    VertexOutOfRange { vertex: usize, num_vertices: usize },

    #[error("vertex id 0 in a 1-based edge list")]
    ZeroVertexId,
}

/// Any error surfaced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid graph: {0}")]
    Graph(#[from] GraphError),
}
