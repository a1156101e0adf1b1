//! Random-proportional transition rule and roulette-wheel selection.
//!
//! The probability of moving from the current city `i` to city `j` is
//!
//! ```text
//! p(j) = tau[i][j]^alpha * eta[i][j]^beta / sum_k tau[i][k]^alpha * eta[i][k]^beta
//! ```
//!
//! where `eta` is the heuristic row with visited columns already zeroed.
//!
//! # Reference
//!
//! Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//! Colony of Cooperating Agents", *IEEE Trans. SMC-B* 26(1), 29-41.

use rand::Rng;

/// How a probability row was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampling {
    /// Weights were normalized by their (positive, finite) sum.
    Normalized,
    /// Some weights overflowed to infinity; the row is uniform over
    /// exactly those cities.
    Saturated,
    /// The weight sum was zero; the row holds a uniform distribution over
    /// cities with a positive heuristic.
    Uniform,
    /// No city has a positive heuristic; the row is all zeros.
    Exhausted,
}

/// Fills `out` with the transition distribution from one city.
///
/// `tau` and `eta` are the pheromone and masked heuristic rows of the
/// current city. Cities with `eta == 0` (visited, or the current city)
/// always receive probability 0.
///
/// Non-finite weights keep the proportional rule as far as possible:
/// - `0 * inf` (empty trail on an overflowing heuristic) counts as 0
/// - if some weights are `+inf`, they share the mass evenly and the
///   rest get 0 ([`Sampling::Saturated`])
/// - if only the sum overflows, weights are rescaled by the largest one
///   before normalizing
///
/// If every weight is zero, falls back to a uniform distribution over the
/// cities that remain selectable and reports [`Sampling::Uniform`].
///
/// # Panics
///
/// Panics if the three slices differ in length.
pub fn transition_probabilities(
    tau: &[f64],
    eta: &[f64],
    alpha: f64,
    beta: f64,
    out: &mut [f64],
) -> Sampling {
    assert_eq!(tau.len(), eta.len(), "row length mismatch");
    assert_eq!(tau.len(), out.len(), "row length mismatch");

    let mut total = 0.0;
    let mut largest: f64 = 0.0;
    for ((p, &t), &e) in out.iter_mut().zip(tau).zip(eta) {
        let w = if e > 0.0 {
            t.powf(alpha) * e.powf(beta)
        } else {
            0.0
        };
        // 0 * inf from an empty trail on a saturated heuristic
        *p = if w.is_nan() { 0.0 } else { w };
        total += *p;
        largest = largest.max(*p);
    }

    if total > 0.0 && total.is_finite() {
        for p in out.iter_mut() {
            *p /= total;
        }
        return Sampling::Normalized;
    }

    if largest == f64::INFINITY {
        let saturated = out.iter().filter(|&&w| w == f64::INFINITY).count();
        let share = 1.0 / saturated as f64;
        for p in out.iter_mut() {
            *p = if *p == f64::INFINITY { share } else { 0.0 };
        }
        return Sampling::Saturated;
    }

    if total == f64::INFINITY {
        // Every weight is finite but the sum overflowed: rescale first.
        let mut rescaled = 0.0;
        for p in out.iter_mut() {
            *p /= largest;
            rescaled += *p;
        }
        for p in out.iter_mut() {
            *p /= rescaled;
        }
        return Sampling::Normalized;
    }

    let open = eta.iter().filter(|&&e| e > 0.0).count();
    if open == 0 {
        out.fill(0.0);
        return Sampling::Exhausted;
    }
    let uniform = 1.0 / open as f64;
    for (p, &e) in out.iter_mut().zip(eta) {
        *p = if e > 0.0 { uniform } else { 0.0 };
    }
    Sampling::Uniform
}

/// Draws a city by inverse-CDF sampling over `probs`.
///
/// Draws `r` from `[0, 1)` and returns the first city, in index order,
/// with positive probability whose cumulative sum reaches `r`. If
/// rounding leaves the total just below `r`, the last city with
/// positive probability is returned. Returns `None` only when every
/// entry is zero.
pub fn select_next_city<R: Rng>(probs: &[f64], rng: &mut R) -> Option<usize> {
    let r: f64 = rng.random();
    let mut cumulative = 0.0;
    let mut last_open = None;
    for (city, &p) in probs.iter().enumerate() {
        if p <= 0.0 {
            continue;
        }
        cumulative += p;
        if cumulative >= r {
            return Some(city);
        }
        last_open = Some(city);
    }
    last_open
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_probabilities_sum_to_one() {
        let tau = [0.5, 0.2, 0.9, 0.4];
        let eta = [0.0, 1.0, 0.5, 0.25];
        let mut out = [0.0; 4];
        let mode = transition_probabilities(&tau, &eta, 1.0, 2.0, &mut out);
        assert_eq!(mode, Sampling::Normalized);
        assert_eq!(out[0], 0.0);
        let sum: f64 = out.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_follow_formula() {
        let tau = [0.0, 1.0, 4.0];
        let eta = [0.0, 1.0, 0.5];
        let mut out = [0.0; 3];
        transition_probabilities(&tau, &eta, 0.5, 1.0, &mut out);
        // weights: 1*1 = 1, 2*0.5 = 1
        assert!((out[1] - 0.5).abs() < 1e-12);
        assert!((out[2] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_pheromone_falls_back_to_uniform() {
        let tau = [0.0, 0.0, 0.0, 0.0];
        let eta = [0.0, 1.0, 0.0, 2.0];
        let mut out = [0.0; 4];
        let mode = transition_probabilities(&tau, &eta, 1.0, 1.0, &mut out);
        assert_eq!(mode, Sampling::Uniform);
        assert_eq!(out, [0.0, 0.5, 0.0, 0.5]);
    }

    #[test]
    fn test_underflow_falls_back_to_uniform() {
        let tau = [0.0, 1e-200, 1e-200];
        let eta = [0.0, 1e-200, 1e-200];
        let mut out = [0.0; 3];
        let mode = transition_probabilities(&tau, &eta, 1.0, 10.0, &mut out);
        assert_eq!(mode, Sampling::Uniform);
        assert!((out[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_overflowing_weight_dominates() {
        let tau = [0.0, 1.0, 1.0];
        let eta = [0.0, 1e200, 1.0];
        let mut out = [0.0; 3];
        let mode = transition_probabilities(&tau, &eta, 1.0, 2.0, &mut out);
        assert_eq!(mode, Sampling::Saturated);
        assert_eq!(out, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_overflowing_sum_is_rescaled() {
        // each weight is 1e308, their sum is +inf
        let tau = [0.0, 1.0, 1.0];
        let eta = [0.0, 1e154, 1e154];
        let mut out = [0.0; 3];
        let mode = transition_probabilities(&tau, &eta, 1.0, 2.0, &mut out);
        assert_eq!(mode, Sampling::Normalized);
        assert!((out[1] - 0.5).abs() < 1e-12);
        assert!((out[2] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_nan_weight_treated_as_zero() {
        // empty trail times saturated heuristic is 0 * inf
        let tau = [0.0, 0.0, 1.0];
        let eta = [0.0, 1e200, 1.0];
        let mut out = [0.0; 3];
        let mode = transition_probabilities(&tau, &eta, 1.0, 2.0, &mut out);
        assert_eq!(mode, Sampling::Normalized);
        assert_eq!(out, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_all_nan_falls_back_to_uniform() {
        let tau = [0.0, 0.0, 0.0];
        let eta = [0.0, 1e200, 1e200];
        let mut out = [0.0; 3];
        let mode = transition_probabilities(&tau, &eta, 1.0, 2.0, &mut out);
        assert_eq!(mode, Sampling::Uniform);
        assert_eq!(out, [0.0, 0.5, 0.5]);
    }

    #[test]
    fn test_all_visited_is_exhausted() {
        let tau = [0.3, 0.3];
        let eta = [0.0, 0.0];
        let mut out = [7.0; 2];
        let mode = transition_probabilities(&tau, &eta, 1.0, 1.0, &mut out);
        assert_eq!(mode, Sampling::Exhausted);
        assert_eq!(out, [0.0, 0.0]);
    }

    #[test]
    fn test_select_never_picks_zero_probability() {
        let mut rng = create_rng(42);
        let probs = [0.0, 0.3, 0.0, 0.7];
        for _ in 0..1000 {
            let city = select_next_city(&probs, &mut rng).unwrap();
            assert!(city == 1 || city == 3);
        }
    }

    #[test]
    fn test_select_short_cumulative_returns_last_open() {
        let mut rng = create_rng(5);
        // Sums to well below 1: most draws exceed the cumulative total.
        let probs = [0.0, 1e-9, 2e-9, 0.0];
        for _ in 0..100 {
            let city = select_next_city(&probs, &mut rng).unwrap();
            assert!(city == 1 || city == 2);
        }
    }

    #[test]
    fn test_select_all_zero_is_none() {
        let mut rng = create_rng(1);
        assert_eq!(select_next_city(&[0.0, 0.0, 0.0], &mut rng), None);
    }

    #[test]
    fn test_select_frequencies_track_probabilities() {
        let mut rng = create_rng(123);
        let probs = [0.0, 0.2, 0.8];
        let trials = 20_000;
        let hits = (0..trials)
            .filter(|_| select_next_city(&probs, &mut rng) == Some(2))
            .count();
        let freq = hits as f64 / trials as f64;
        assert!((freq - 0.8).abs() < 0.02, "frequency {freq} far from 0.8");
    }
}
