//! Tour representation and the best-solution record.

use super::matrix::DistanceMatrix;

/// A closed tour: starts at city 0, visits every city once, returns to 0.
///
/// For N cities the sequence has N+1 entries, e.g. `[0, 2, 1, 3, 0]`.
pub type Tour = Vec<usize>;

/// Total length of a tour, summed over consecutive pairs.
///
/// Because the tour already ends with the return to its start, this
/// covers every edge of the cycle, closing edge included.
pub fn tour_cost(distances: &DistanceMatrix, tour: &[usize]) -> f64 {
    tour.windows(2).map(|w| distances.get(w[0], w[1])).sum()
}

/// Returns `true` if `tour` is a permutation of `0..n` starting at 0,
/// followed by a return to 0.
pub fn is_valid_tour(tour: &[usize], n: usize) -> bool {
    if n == 0 || tour.len() != n + 1 || tour[0] != 0 || tour[n] != 0 {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in &tour[..n] {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

/// The best tour found so far and its cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestTour {
    /// City sequence, first = last = 0.
    pub tour: Tour,
    /// Total length of `tour`.
    pub cost: f64,
}

impl BestTour {
    /// Replaces `best` with `(tour, cost)` if there is no record yet or
    /// `cost` is strictly lower. Ties keep the existing record.
    ///
    /// Returns `true` if the record changed.
    pub fn offer(best: &mut Option<BestTour>, tour: &[usize], cost: f64) -> bool {
        let improves = best.as_ref().is_none_or(|b| cost < b.cost);
        if improves {
            *best = Some(BestTour {
                tour: tour.to_vec(),
                cost,
            });
        }
        improves
    }
}
