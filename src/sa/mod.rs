//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! The engine is domain-agnostic. A run is assembled from three pluggable
//! pieces:
//!
//! - an initial solution and an objective ([`SaProblem`], or closures via
//!   [`optimize`] / [`FnProblem`]),
//! - one or more move types ([`Neighborhood`]), chosen per trial,
//! - a cooling schedule ([`TemperatureSchedule`], built-ins in
//!   [`CoolingSchedule`]).
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod runner;
mod schedule;
mod types;

pub use config::SaConfig;
pub use runner::{metropolis_accept, optimize, MoveStats, SaResult, SaRunner};
pub use schedule::{
    stage_count, CoolingSchedule, TemperatureRange, TemperatureSchedule, Temperatures,
};
pub use types::{FnProblem, Neighborhood, SaProblem};
