//! Global pheromone update (Ant System).
//!
//! After every ant of an iteration has finished:
//!
//! 1. Evaporate: `tau[i][j] *= 1 - rho` for every entry
//! 2. Deposit: each tour `k` adds `Q / L_k` to every `(from, to)` step it took
//! 3. Offer each tour to the best-so-far record, in ant order

use super::matrix::{DistanceMatrix, PheromoneMatrix};
use super::types::{tour_cost, BestTour, Tour};

/// Outcome of one pheromone update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationSummary {
    /// Shortest tour length among this iteration's ants.
    pub iteration_best: f64,
    /// Whether the global best record changed.
    pub improved: bool,
}

/// Applies evaporation and deposits for one iteration's batch of tours,
/// and updates `best`.
///
/// Deposits only touch the traversed direction of each edge. The
/// pheromone matrix is the single shared mutable state of a run and is
/// written here only, after construction has finished.
pub fn update_pheromones(
    pheromone: &mut PheromoneMatrix,
    tours: &[Tour],
    distances: &DistanceMatrix,
    rho: f64,
    q: f64,
    best: &mut Option<BestTour>,
) -> IterationSummary {
    pheromone.evaporate(rho);

    let mut iteration_best = f64::INFINITY;
    let mut improved = false;
    for tour in tours {
        let length = tour_cost(distances, tour);
        pheromone.deposit(tour, q / length);
        iteration_best = iteration_best.min(length);
        improved |= BestTour::offer(best, tour, length);
    }

    IterationSummary {
        iteration_best,
        improved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn square() -> DistanceMatrix {
        // 0-1-2-3 perimeter has length 4, diagonals 2 each
        DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0, 1.0],
            vec![1.0, 0.0, 1.0, 2.0],
            vec![2.0, 1.0, 0.0, 1.0],
            vec![1.0, 2.0, 1.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_evaporation_only() {
        let dm = square();
        let mut tau = PheromoneMatrix::random(4, &mut create_rng(8));
        let before = tau.clone();
        let mut best = None;
        let summary = update_pheromones(&mut tau, &[], &dm, 0.3, 1.0, &mut best);

        assert!(best.is_none());
        assert!(!summary.improved);
        assert_eq!(summary.iteration_best, f64::INFINITY);
        for i in 0..4 {
            for j in 0..4 {
                assert!((tau.get(i, j) - 0.7 * before.get(i, j)).abs() < 1e-15);
                if before.get(i, j) > 0.0 {
                    assert!(tau.get(i, j) < before.get(i, j));
                }
            }
        }
    }

    #[test]
    fn test_deposit_amount_and_direction() {
        let dm = square();
        let mut tau = PheromoneMatrix::filled(4, 1.0);
        let mut best = None;
        let tours = vec![vec![0, 1, 2, 3, 0]];
        update_pheromones(&mut tau, &tours, &dm, 0.5, 2.0, &mut best);

        // 0.5 after evaporation, plus 2 / 4
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            assert!((tau.get(a, b) - 1.0).abs() < 1e-12, "({a},{b})");
        }
        for (a, b) in [(1, 0), (2, 1), (3, 2), (0, 3), (0, 2)] {
            assert!((tau.get(a, b) - 0.5).abs() < 1e-12, "({a},{b})");
        }
    }

    #[test]
    fn test_best_record_picks_shortest() {
        let dm = square();
        let mut tau = PheromoneMatrix::filled(4, 1.0);
        let mut best = None;
        let tours = vec![vec![0, 2, 1, 3, 0], vec![0, 1, 2, 3, 0], vec![0, 3, 2, 1, 0]];
        let summary = update_pheromones(&mut tau, &tours, &dm, 0.1, 1.0, &mut best);

        let best = best.unwrap();
        assert!(summary.improved);
        assert!((summary.iteration_best - 4.0).abs() < 1e-12);
        assert!((best.cost - 4.0).abs() < 1e-12);
        // ties keep the first tour found
        assert_eq!(best.tour, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_best_record_not_replaced_by_worse() {
        let dm = square();
        let mut tau = PheromoneMatrix::filled(4, 1.0);
        let mut best = Some(BestTour {
            tour: vec![0, 1, 2, 3, 0],
            cost: 4.0,
        });
        let summary =
            update_pheromones(&mut tau, &[vec![0, 2, 1, 3, 0]], &dm, 0.1, 1.0, &mut best);
        assert!(!summary.improved);
        assert!((summary.iteration_best - 6.0).abs() < 1e-12);
        assert_eq!(best.unwrap().tour, vec![0, 1, 2, 3, 0]);
    }

    proptest! {
        #[test]
        fn prop_pheromone_stays_non_negative(
            seed in any::<u64>(),
            rho in 0.001f64..=1.0,
            q in 0.001f64..100.0,
            rounds in 1usize..30,
        ) {
            let dm = square();
            let mut rng = create_rng(seed);
            let mut tau = PheromoneMatrix::random(4, &mut rng);
            let mut best = None;
            let tours = vec![vec![0, 1, 2, 3, 0], vec![0, 2, 3, 1, 0]];
            for _ in 0..rounds {
                update_pheromones(&mut tau, &tours, &dm, rho, q, &mut best);
                prop_assert!(tau.min_value() >= 0.0);
            }
        }
    }
}
