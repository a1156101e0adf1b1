//! Tour construction for a single ant.

use super::matrix::{HeuristicMatrix, PheromoneMatrix};
use super::transition::{select_next_city, transition_probabilities, Sampling};
use super::types::Tour;
use log::trace;
use rand::Rng;

/// A constructed tour plus how often sampling had to fall back.
#[derive(Debug, Clone)]
pub struct AntTour {
    /// Closed tour, first = last = 0.
    pub tour: Tour,
    /// Steps where the transition weights were degenerate.
    pub degenerate_steps: usize,
}

/// Walks one ant through a complete tour.
///
/// Holds the per-ant scratch buffers (visited mask, masked heuristic
/// row, probability row) so they can be reused across constructions.
/// The pheromone and heuristic matrices are only read, so any number of
/// builders may share them.
///
/// # Examples
///
/// ```
/// use u_aco::aco::{is_valid_tour, DistanceMatrix, HeuristicMatrix, PheromoneMatrix, TourBuilder};
/// use u_aco::random::create_rng;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 2.0, 9.0],
///     vec![2.0, 0.0, 6.0],
///     vec![9.0, 6.0, 0.0],
/// ])
/// .unwrap();
/// let eta = HeuristicMatrix::from_distances(&dm);
/// let tau = PheromoneMatrix::filled(3, 1.0);
///
/// let mut builder = TourBuilder::new(&tau, &eta, 1.0, 2.0);
/// let ant = builder.construct(&mut create_rng(7));
/// assert!(is_valid_tour(&ant.tour, 3));
/// ```
pub struct TourBuilder<'a> {
    pheromone: &'a PheromoneMatrix,
    heuristic: &'a HeuristicMatrix,
    alpha: f64,
    beta: f64,
    visited: Vec<bool>,
    eta_row: Vec<f64>,
    probs: Vec<f64>,
}

impl<'a> TourBuilder<'a> {
    /// Creates a builder over a pheromone snapshot and heuristic.
    ///
    /// # Panics
    ///
    /// Panics if the two matrices differ in size.
    pub fn new(
        pheromone: &'a PheromoneMatrix,
        heuristic: &'a HeuristicMatrix,
        alpha: f64,
        beta: f64,
    ) -> Self {
        let n = heuristic.size();
        assert_eq!(pheromone.size(), n, "pheromone/heuristic size mismatch");
        Self {
            pheromone,
            heuristic,
            alpha,
            beta,
            visited: vec![false; n],
            eta_row: vec![0.0; n],
            probs: vec![0.0; n],
        }
    }

    /// Constructs one closed tour starting and ending at city 0.
    pub fn construct<R: Rng>(&mut self, rng: &mut R) -> AntTour {
        let n = self.heuristic.size();
        self.visited.fill(false);

        let mut tour = Vec::with_capacity(n + 1);
        let mut current = 0;
        let mut degenerate_steps = 0;
        tour.push(current);
        self.visited[current] = true;

        while tour.len() < n {
            self.heuristic
                .masked_row(current, &self.visited, &mut self.eta_row);
            let mode = transition_probabilities(
                self.pheromone.row(current),
                &self.eta_row,
                self.alpha,
                self.beta,
                &mut self.probs,
            );
            if mode != Sampling::Normalized {
                degenerate_steps += 1;
                trace!("degenerate transition weights at city {current}: {mode:?}");
            }

            let next = select_next_city(&self.probs, rng)
                .or_else(|| self.visited.iter().position(|&seen| !seen))
                .expect("an unvisited city remains while the tour is incomplete");

            self.visited[next] = true;
            tour.push(next);
            current = next;
        }

        tour.push(0);
        AntTour {
            tour,
            degenerate_steps,
        }
    }
}
