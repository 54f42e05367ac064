//! Core traits for Simulated Annealing.

use crate::random::SaRng;
use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The user implements initial solution generation and cost evaluation.
/// Moves are supplied separately as one or more [`Neighborhood`]s, so
/// several move types can be mixed in a single run.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```ignore
/// struct TspProblem { distances: Vec<Vec<f64>> }
///
/// impl SaProblem for TspProblem {
///     type Solution = Vec<usize>;
///
///     fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Vec<usize> {
///         (0..self.distances.len()).collect()
///     }
///
///     fn cost(&self, tour: &Vec<usize>) -> f64 {
///         tour.windows(2).map(|w| self.distances[w[0]][w[1]]).sum()
///     }
/// }
/// ```
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait SaProblem {
    /// The solution representation type. `Clone` is the snapshot used to
    /// retain the best solution independently of the working one.
    type Solution: Clone;

    /// Creates the initial solution. Called exactly once per run.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    ///
    /// Must be pure: the engine evaluates every candidate once.
    fn cost(&self, solution: &Self::Solution) -> f64;
}

/// One move type: produces a new solution "near" the given one.
///
/// The input is never modified. A neighborhood that finds no valid move
/// returns a copy of its input, which the engine runs as a cost-neutral
/// trial.
///
/// Any closure `Fn(&S, &mut SaRng) -> S` is a neighborhood.
pub trait Neighborhood<S> {
    /// Returns a human-readable name for this move type.
    fn name(&self) -> &str {
        "neighbor"
    }

    /// Proposes a neighbor of `solution`.
    fn propose(&self, solution: &S, rng: &mut SaRng) -> S;
}

impl<S, F> Neighborhood<S> for F
where
    F: Fn(&S, &mut SaRng) -> S,
{
    fn propose(&self, solution: &S, rng: &mut SaRng) -> S {
        self(solution, rng)
    }
}

/// A problem assembled from an initial-state producer and an objective.
///
/// ```
/// use u_coloring::sa::{FnProblem, SaProblem};
///
/// let problem = FnProblem::new(|| 3.0_f64, |x: &f64| x * x);
/// let mut rng = u_coloring::random::create_rng(0);
/// let x = problem.initial_solution(&mut rng);
/// assert_eq!(problem.cost(&x), 9.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnProblem<I, O> {
    initial: I,
    objective: O,
}

impl<I, O> FnProblem<I, O> {
    pub fn new(initial: I, objective: O) -> Self {
        Self { initial, objective }
    }
}

impl<S, I, O> SaProblem for FnProblem<I, O>
where
    S: Clone,
    I: Fn() -> S,
    O: Fn(&S) -> f64,
{
    type Solution = S;

    fn initial_solution<R: Rng>(&self, _rng: &mut R) -> S {
        (self.initial)()
    }

    fn cost(&self, solution: &S) -> f64 {
        (self.objective)(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    struct Increment;

    impl Neighborhood<u32> for Increment {
        fn name(&self) -> &str {
            "increment"
        }

        fn propose(&self, solution: &u32, _rng: &mut SaRng) -> u32 {
            solution + 1
        }
    }

    #[test]
    fn test_closure_is_neighborhood() {
        let decrement = |s: &u32, _: &mut SaRng| s.saturating_sub(1);
        let mut rng = create_rng(1);
        assert_eq!(decrement.propose(&5, &mut rng), 4);
        assert_eq!(decrement.name(), "neighbor");
    }

    #[test]
    fn test_mixed_neighborhoods_as_trait_objects() {
        let decrement = |s: &u32, _: &mut SaRng| s.saturating_sub(1);
        let moves: [&dyn Neighborhood<u32>; 2] = [&Increment, &decrement];
        let mut rng = create_rng(1);
        assert_eq!(moves[0].propose(&5, &mut rng), 6);
        assert_eq!(moves[1].propose(&5, &mut rng), 4);
        assert_eq!(moves[0].name(), "increment");
    }
}
