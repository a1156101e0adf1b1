//! ACO execution loop.
//!
//! [`AcoRunner`] drives the colony:
//! seed pheromone → construct tours → evaporate/deposit → repeat,
//! until the evaluation budget or the iteration cap is reached.

use super::config::AcoConfig;
use super::construction::{AntTour, TourBuilder};
use super::matrix::{DistanceMatrix, HeuristicMatrix, PheromoneMatrix};
use super::pheromone::update_pheromones;
use super::types::{BestTour, Tour};
use crate::error::{AcoError, Result};
use crate::random::{ant_seeds, create_rng, master_rng};
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// `num_ants * iterations` reached the evaluation budget.
    EvaluationBudget,
    /// `max_iterations` iterations completed.
    MaxIterations,
    /// The wall-clock limit elapsed.
    TimeLimit,
    /// The cancellation flag was set.
    Cancelled,
}

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Best tour found, first = last = 0.
    ///
    /// Empty only if the run was stopped before its first iteration.
    pub best_tour: Tour,

    /// Length of `best_tour` (`f64::INFINITY` if no tour was built).
    pub best_cost: f64,

    /// Completed iterations.
    pub iterations: usize,

    /// Completed fitness evaluations (tours constructed).
    pub evaluations: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best cost after each iteration. Non-increasing.
    pub cost_history: Vec<f64>,

    /// Construction steps that used the uniform sampling fallback.
    pub degenerate_steps: usize,
}

/// Executes the Ant System on a distance matrix.
///
/// # Usage
///
/// ```
/// use u_aco::aco::{AcoConfig, AcoRunner, DistanceMatrix};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 1.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![1.0, 2.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let config = AcoConfig::fast().with_seed(42);
/// let result = AcoRunner::run(&dm, &config).unwrap();
/// assert!((result.best_cost - 4.0).abs() < 1e-9);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO optimization.
    ///
    /// # Errors
    ///
    /// Returns [`AcoError::InvalidConfig`] if `config` fails validation.
    pub fn run(distances: &DistanceMatrix, config: &AcoConfig) -> Result<AcoResult> {
        Self::run_with_cancel(distances, config, None)
    }

    /// Runs ACO with an optional cancellation token.
    ///
    /// If `cancel` is set to `true`, the run stops before its next
    /// iteration and returns the best tour found so far.
    pub fn run_with_cancel(
        distances: &DistanceMatrix,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AcoResult> {
        config.validate().map_err(AcoError::InvalidConfig)?;

        let start = Instant::now();
        let time_limit = config.time_limit_ms.map(Duration::from_millis);
        let mut rng = master_rng(config.seed);

        let heuristic = HeuristicMatrix::from_distances(distances);
        let mut pheromone = PheromoneMatrix::random(distances.size(), &mut rng);
        let mut best: Option<BestTour> = None;

        let mut iterations = 0usize;
        let mut evaluations = 0usize;
        let mut degenerate_steps = 0usize;
        let mut cost_history = Vec::new();

        let termination = loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    break Termination::Cancelled;
                }
            }
            if time_limit.is_some_and(|limit| start.elapsed() >= limit) {
                break Termination::TimeLimit;
            }

            // Every ant reads the same pheromone snapshot.
            let seeds = ant_seeds(&mut rng, config.num_ants);
            let ants = construct_batch(&pheromone, &heuristic, config, &seeds);

            degenerate_steps += ants.iter().map(|a| a.degenerate_steps).sum::<usize>();
            let tours: Vec<Tour> = ants.into_iter().map(|a| a.tour).collect();

            let summary = update_pheromones(
                &mut pheromone,
                &tours,
                distances,
                config.rho,
                config.q,
                &mut best,
            );

            iterations += 1;
            evaluations += config.num_ants;
            let best_cost = best.as_ref().map_or(f64::INFINITY, |b| b.cost);
            cost_history.push(best_cost);

            debug!(
                "iteration {iterations}: evaluations={evaluations} iteration_best={:.4} best={best_cost:.4}{}",
                summary.iteration_best,
                if summary.improved { " (improved)" } else { "" }
            );

            if config.evaluation_budget > 0 && evaluations >= config.evaluation_budget {
                break Termination::EvaluationBudget;
            }
            if iterations >= config.max_iterations {
                break Termination::MaxIterations;
            }
        };

        let (best_tour, best_cost) = match best {
            Some(b) => (b.tour, b.cost),
            None => (Vec::new(), f64::INFINITY),
        };

        info!(
            "aco finished: {termination:?} after {iterations} iterations ({evaluations} evaluations), best={best_cost:.4}"
        );

        Ok(AcoResult {
            best_tour,
            best_cost,
            iterations,
            evaluations,
            termination,
            cost_history,
            degenerate_steps,
        })
    }
}

/// Constructs one tour per seed, in seed order.
fn construct_batch(
    pheromone: &PheromoneMatrix,
    heuristic: &HeuristicMatrix,
    config: &AcoConfig,
    seeds: &[u64],
) -> Vec<AntTour> {
    #[cfg(feature = "parallel")]
    {
        if config.parallel {
            use rayon::prelude::*;
            return seeds
                .par_iter()
                .map_init(
                    || TourBuilder::new(pheromone, heuristic, config.alpha, config.beta),
                    |builder, &seed| builder.construct(&mut create_rng(seed)),
                )
                .collect();
        }
    }

    let mut builder = TourBuilder::new(pheromone, heuristic, config.alpha, config.beta);
    seeds
        .iter()
        .map(|&seed| builder.construct(&mut create_rng(seed)))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
