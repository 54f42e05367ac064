//! Graph coloring as an annealing problem.

use super::graph::Graph;
use super::moves::{RecolorVertex, SwapColorClasses};
use super::solution::{class_square_sum, color_count, trivial_coloring, verify, Coloring};
use crate::error::Error;
use crate::sa::{Neighborhood, SaConfig, SaProblem, SaResult, SaRunner};
use log::{info, warn};
use rand::Rng;

/// What a coloring run minimizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColoringObjective {
    /// Number of distinct colors in use.
    #[default]
    ColorCount,

    /// Negative sum of squared color-class sizes. Favors few, large
    /// classes and shapes a smoother landscape than the raw color count.
    ClassSquareSum,
}

impl ColoringObjective {
    pub fn evaluate(self, coloring: &[usize]) -> f64 {
        match self {
            ColoringObjective::ColorCount => color_count(coloring) as f64,
            ColoringObjective::ClassSquareSum => -(class_square_sum(coloring) as f64),
        }
    }
}

/// Graph coloring problem: starts from the trivial coloring and scores
/// solutions with the chosen [`ColoringObjective`].
#[derive(Debug, Clone, Copy)]
pub struct GraphColoring<'g> {
    graph: &'g Graph,
    objective: ColoringObjective,
}

impl<'g> GraphColoring<'g> {
    pub fn new(graph: &'g Graph, objective: ColoringObjective) -> Self {
        Self { graph, objective }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn objective(&self) -> ColoringObjective {
        self.objective
    }
}

impl SaProblem for GraphColoring<'_> {
    type Solution = Coloring;

    fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Coloring {
        trivial_coloring(self.graph.num_vertices())
    }

    fn cost(&self, coloring: &Coloring) -> f64 {
        self.objective.evaluate(coloring)
    }
}

/// Outcome of [`solve`].
#[derive(Debug, Clone)]
pub struct ColoringOutcome {
    /// Best coloring found.
    pub coloring: Coloring,
    /// Distinct colors in `coloring`.
    pub colors_used: usize,
    /// Whether `coloring` is proper.
    pub valid: bool,
    /// Full engine result.
    pub run: SaResult<Coloring>,
}

/// Colors `graph` by annealing with the recolor-vertex move, then verifies
/// the best coloring.
///
/// # Examples
///
/// ```
/// use u_coloring::coloring::{solve, ColoringObjective, Graph};
/// use u_coloring::sa::SaConfig;
///
/// let g = Graph::from_one_based_edges(4, &[(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap();
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.1)
///     .with_iterations_per_temperature(50)
///     .with_seed(1);
///
/// let outcome = solve(&g, ColoringObjective::ColorCount, &config).unwrap();
/// assert!(outcome.valid);
/// assert_eq!(outcome.colors_used, 2);
/// ```
pub fn solve(
    graph: &Graph,
    objective: ColoringObjective,
    config: &SaConfig,
) -> Result<ColoringOutcome, Error> {
    let recolor = RecolorVertex::new(graph);
    solve_with(graph, objective, &[&recolor], config)
}

/// Like [`solve`], mixing the recolor-vertex and swap-color-classes moves.
pub fn solve_mixed(
    graph: &Graph,
    objective: ColoringObjective,
    config: &SaConfig,
) -> Result<ColoringOutcome, Error> {
    let recolor = RecolorVertex::new(graph);
    solve_with(graph, objective, &[&recolor, &SwapColorClasses], config)
}

fn solve_with(
    graph: &Graph,
    objective: ColoringObjective,
    neighborhoods: &[&dyn Neighborhood<Coloring>],
    config: &SaConfig,
) -> Result<ColoringOutcome, Error> {
    info!(
        "coloring {} vertices, {} edges, objective {:?}",
        graph.num_vertices(),
        graph.num_edges(),
        objective
    );

    let problem = GraphColoring::new(graph, objective);
    let run = SaRunner::run(&problem, neighborhoods, config)?;

    let colors_used = color_count(&run.best);
    let valid = verify(graph, &run.best);
    if valid {
        info!("found a proper coloring with {colors_used} colors");
    } else {
        warn!("best coloring with {colors_used} colors is not proper");
    }

    Ok(ColoringOutcome {
        coloring: run.best.clone(),
        colors_used,
        valid,
        run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::random::create_rng;
    use crate::sa::{optimize, CoolingSchedule};

    fn cycle_config(seed: u64) -> SaConfig {
        SaConfig::default()
            .with_initial_temperature(100.0)
            .with_min_temperature(0.1)
            .with_iterations_per_temperature(50)
            .with_seed(seed)
    }

    fn four_cycle() -> Graph {
        Graph::from_one_based_edges(4, &[(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap()
    }

    #[test]
    fn test_objectives() {
        let c = [0, 1, 0, 2];
        assert_eq!(ColoringObjective::ColorCount.evaluate(&c), 3.0);
        assert_eq!(ColoringObjective::ClassSquareSum.evaluate(&c), -6.0);
        assert_eq!(ColoringObjective::default(), ColoringObjective::ColorCount);
    }

    #[test]
    fn test_initial_solution_is_trivial() {
        let g = four_cycle();
        let problem = GraphColoring::new(&g, ColoringObjective::ColorCount);
        let mut rng = create_rng(0);
        let initial = problem.initial_solution(&mut rng);
        assert_eq!(initial, vec![0, 1, 2, 3]);
        assert!(verify(&g, &initial));
        assert_eq!(problem.cost(&initial), 4.0);
    }

    #[test]
    fn test_four_cycle_needs_two_colors() {
        let g = four_cycle();
        for seed in 0..10 {
            let outcome = solve(&g, ColoringObjective::ColorCount, &cycle_config(seed)).unwrap();
            assert_eq!(outcome.run.best_cost, 2.0, "seed {seed}");
            assert_eq!(outcome.colors_used, 2);
            assert!(outcome.valid);
        }
    }

    #[test]
    fn test_four_cycle_through_closures() {
        let g = four_cycle();
        let recolor = RecolorVertex::new(&g);
        let n = g.num_vertices();

        let result = optimize(
            || trivial_coloring(n),
            &[&recolor],
            |c: &Coloring| color_count(c) as f64,
            &cycle_config(4),
        )
        .unwrap();

        assert_eq!(result.best_cost, 2.0);
        assert!(verify(&g, &result.best));
    }

    #[test]
    fn test_class_square_sum_objective_stays_proper() {
        let g = Graph::from_edges(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (0, 3)])
            .unwrap();
        let outcome = solve(&g, ColoringObjective::ClassSquareSum, &cycle_config(2)).unwrap();
        assert!(outcome.valid);
        assert!(outcome.run.best_cost < -6.0);
    }

    #[test]
    fn test_mixed_moves() {
        let g = Graph::from_edges(
            8,
            &[
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 0),
                (4, 5),
                (5, 6),
                (6, 7),
                (7, 4),
                (0, 4),
            ],
        )
        .unwrap();
        let outcome = solve_mixed(&g, ColoringObjective::ColorCount, &cycle_config(6)).unwrap();
        assert!(outcome.valid);
        assert_eq!(outcome.run.move_stats.len(), 2);
        assert!(outcome.run.move_stats[1].proposed > 0);
        assert!(outcome.colors_used <= 3);
    }

    #[test]
    fn test_petersen_graph_three_colors() {
        let edges = [
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 0),
            (0, 5),
            (1, 6),
            (2, 7),
            (3, 8),
            (4, 9),
            (5, 7),
            (7, 9),
            (9, 6),
            (6, 8),
            (8, 5),
        ];
        let g = Graph::from_edges(10, &edges).unwrap();
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(0.05)
            .with_cooling(CoolingSchedule::Geometric { alpha: 0.97 })
            .with_iterations_per_temperature(200)
            .with_seed(21);

        let outcome = solve(&g, ColoringObjective::ColorCount, &config).unwrap();
        assert!(outcome.valid);
        assert!(outcome.colors_used >= 3);
        assert!(outcome.colors_used <= 4, "used {}", outcome.colors_used);
    }

    #[test]
    fn test_single_vertex() {
        let g = Graph::from_edges(1, &[]).unwrap();
        let outcome = solve(&g, ColoringObjective::ColorCount, &cycle_config(0)).unwrap();
        assert_eq!(outcome.coloring, vec![0]);
        assert_eq!(outcome.colors_used, 1);
        assert!(outcome.valid);
    }

    #[test]
    fn test_bad_config_surfaces_as_error() {
        let g = four_cycle();
        let config = cycle_config(0).with_iterations_per_temperature(0);
        let err = solve(&g, ColoringObjective::ColorCount, &config).unwrap_err();
        assert_eq!(err, Error::Config(ConfigError::ZeroRepeats));
    }
}
