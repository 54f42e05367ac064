//! SA execution loop.

use super::config::SaConfig;
use super::schedule::{TemperatureSchedule, Temperatures};
use super::types::{FnProblem, Neighborhood, SaProblem};
use crate::error::ConfigError;
use crate::random::{rng_from_seed, SaRng};
use log::{debug, info, trace, warn};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Per-neighborhood move counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveStats {
    /// Trials that used this neighborhood.
    pub proposed: usize,
    /// Trials whose candidate became the current solution.
    pub accepted: usize,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// The working solution when the run ended.
    pub final_solution: S,

    /// Cost of `final_solution`.
    pub final_cost: f64,

    /// Total number of trials (neighbor evaluations).
    pub iterations: usize,

    /// Number of temperature stages run.
    pub stages: usize,

    /// Temperature of the last stage run, or the initial temperature if
    /// no stage ran.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements and neutral moves).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Counters per neighborhood, in the order they were supplied.
    pub move_stats: Vec<MoveStats>,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Whether the configured time limit stopped the run.
    pub timed_out: bool,

    /// Best cost at the start and after every stage. Non-increasing.
    pub cost_history: Vec<f64>,
}

/// Metropolis acceptance criterion.
///
/// A non-worsening move (`delta <= 0`) is accepted without consuming a
/// random number. A worsening move draws one uniform number in `[0, 1)`
/// and is accepted iff it is below `exp(-delta / temperature)`.
pub fn metropolis_accept<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta <= 0.0 {
        return true;
    }
    let probability = (-delta / temperature).exp();
    rng.random_range(0.0..1.0) < probability
}

/// Select a neighborhood index: uniform, or roulette wheel on `weights`.
fn select_neighborhood(count: usize, weights: Option<&[f64]>, rng: &mut SaRng) -> usize {
    if count == 1 {
        return 0;
    }
    let Some(weights) = weights else {
        return rng.random_range(0..count);
    };

    let total: f64 = weights.iter().sum();
    let mut roll = rng.random_range(0.0..total);
    for (i, &weight) in weights.iter().enumerate() {
        roll -= weight;
        if roll <= 0.0 {
            return i;
        }
    }
    count - 1
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization with the configured cooling schedule.
    pub fn run<P: SaProblem>(
        problem: &P,
        neighborhoods: &[&dyn Neighborhood<P::Solution>],
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution>, ConfigError> {
        Self::run_with_cancel(problem, neighborhoods, config, None)
    }

    /// Runs SA with an optional cancellation token.
    ///
    /// The token is checked between stages only, so every stage that starts
    /// runs all of its trials.
    pub fn run_with_cancel<P: SaProblem>(
        problem: &P,
        neighborhoods: &[&dyn Neighborhood<P::Solution>],
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>, ConfigError> {
        Self::run_with_schedule(problem, neighborhoods, config, &config.cooling, cancel)
    }

    /// Runs SA with a caller-supplied schedule in place of `config.cooling`.
    pub fn run_with_schedule<P, C>(
        problem: &P,
        neighborhoods: &[&dyn Neighborhood<P::Solution>],
        config: &SaConfig,
        schedule: &C,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>, ConfigError>
    where
        P: SaProblem,
        C: TemperatureSchedule + ?Sized,
    {
        config.validate_run()?;
        config.validate_neighborhoods(neighborhoods.len())?;
        schedule.validate()?;

        let started = Instant::now();
        let mut rng = rng_from_seed(config.seed);
        let weights = config.neighbor_weights.as_deref();

        // Initialize
        let mut current = problem.initial_solution(&mut rng);
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        info!(
            "annealing from T={} to T={} with {} trials per stage, initial cost {}",
            config.initial_temperature,
            config.min_temperature,
            config.iterations_per_temperature,
            current_cost
        );

        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut stages = 0usize;
        let mut final_temperature = config.initial_temperature;
        let mut move_stats = vec![MoveStats::default(); neighborhoods.len()];
        let mut cancelled = false;
        let mut timed_out = false;
        let mut cost_history = vec![best_cost];

        for temperature in Temperatures::new(schedule, config.range()) {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    warn!("annealing cancelled after {stages} stages");
                    break;
                }
            }
            if let Some(limit) = config.time_limit {
                if started.elapsed() >= limit {
                    timed_out = true;
                    warn!("annealing hit its {limit:?} time limit after {stages} stages");
                    break;
                }
            }

            let mut stage_accepted = 0usize;
            for _ in 0..config.iterations_per_temperature {
                let index = select_neighborhood(neighborhoods.len(), weights, &mut rng);
                let candidate = neighborhoods[index].propose(&current, &mut rng);
                let candidate_cost = problem.cost(&candidate);
                let delta = candidate_cost - current_cost;
                move_stats[index].proposed += 1;
                total_iterations += 1;

                if !metropolis_accept(delta, temperature, &mut rng) {
                    continue;
                }

                if delta < 0.0 {
                    improving_moves += 1;
                }
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;
                stage_accepted += 1;
                move_stats[index].accepted += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    debug!(
                        "new best cost {best_cost} at T={temperature:.6} via {}",
                        neighborhoods[index].name()
                    );
                }
            }

            trace!(
                "stage {stages}: T={temperature:.6}, accepted {stage_accepted}/{}, current {current_cost}, best {best_cost}",
                config.iterations_per_temperature
            );
            stages += 1;
            final_temperature = temperature;
            cost_history.push(best_cost);
        }

        info!(
            "annealing finished: best cost {best_cost} after {stages} stages, {total_iterations} trials, {accepted_moves} accepted"
        );

        Ok(SaResult {
            best,
            best_cost,
            final_solution: current,
            final_cost: current_cost,
            iterations: total_iterations,
            stages,
            final_temperature,
            accepted_moves,
            improving_moves,
            move_stats,
            cancelled,
            timed_out,
            cost_history,
        })
    }
}

/// Runs the engine on closures.
///
/// `initial` is called once, `objective` once per trial, and each trial
/// picks one of `neighborhoods` (uniformly, or by `config.neighbor_weights`).
/// The best solution is snapshotted with `Clone`.
///
/// # Examples
///
/// ```
/// use u_coloring::random::SaRng;
/// use u_coloring::sa::{optimize, SaConfig};
/// use rand::Rng;
///
/// let step = |x: &i64, rng: &mut SaRng| x + rng.random_range(-1..=1);
/// let config = SaConfig::default()
///     .with_initial_temperature(10.0)
///     .with_min_temperature(0.01)
///     .with_seed(42);
///
/// let result = optimize(|| 25_i64, &[&step], |x: &i64| (x * x) as f64, &config).unwrap();
/// assert!(result.best_cost < 625.0);
/// ```
pub fn optimize<S, I, O>(
    initial: I,
    neighborhoods: &[&dyn Neighborhood<S>],
    objective: O,
    config: &SaConfig,
) -> Result<SaResult<S>, ConfigError>
where
    S: Clone,
    I: Fn() -> S,
    O: Fn(&S) -> f64,
{
    SaRunner::run(&FnProblem::new(initial, objective), neighborhoods, config)
}
