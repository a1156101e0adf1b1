//! Dense row-major matrices used by the colony.
//!
//! - [`DistanceMatrix`]: validated, immutable problem input
//! - [`HeuristicMatrix`]: inverse-distance desirability, built once per solve
//! - [`PheromoneMatrix`]: learned trail strength, mutated once per iteration

use crate::error::{AcoError, Result};
use rand::Rng;

/// A validated N×N distance matrix stored in row-major order.
///
/// Guarantees `N >= 2`, a zero diagonal, and finite, strictly positive
/// off-diagonal entries. Symmetry is expected but not enforced.
///
/// # Examples
///
/// ```
/// use u_aco::aco::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 3.0, 4.0],
///     vec![3.0, 0.0, 5.0],
///     vec![4.0, 5.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.size(), 3);
/// assert!((dm.get(1, 2) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Builds a matrix from nested rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(AcoError::Empty);
        }
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(AcoError::NotSquare {
                    row: i,
                    expected: size,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Self::from_data(size, data)
    }

    /// Builds a matrix from a flat row-major buffer of `size * size` entries.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if size == 0 {
            return Err(AcoError::Empty);
        }
        if data.len() != size * size {
            return Err(AcoError::NotSquare {
                row: 0,
                expected: size * size,
                found: data.len(),
            });
        }
        let dm = Self { data, size };
        dm.validate()?;
        Ok(dm)
    }

    /// Builds a matrix from rows that omit the diagonal.
    ///
    /// Row `i` lists the costs from city `i` to every other city in index
    /// order (N-1 entries). A `0` is inserted at position `i`.
    ///
    /// ```
    /// use u_aco::aco::DistanceMatrix;
    ///
    /// let dm = DistanceMatrix::from_off_diagonal(vec![
    ///     vec![2.0, 7.0],
    ///     vec![2.0, 4.0],
    ///     vec![7.0, 4.0],
    /// ])
    /// .unwrap();
    /// assert_eq!(dm.row(1), &[2.0, 0.0, 4.0]);
    /// ```
    pub fn from_off_diagonal(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, mut row)| {
                if row.len() + 1 != size {
                    return Err(AcoError::NotSquare {
                        row: i,
                        expected: size.saturating_sub(1),
                        found: row.len(),
                    });
                }
                row.insert(i, 0.0);
                Ok(row)
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(rows)
    }

    fn validate(&self) -> Result<()> {
        if self.size < 2 {
            return Err(AcoError::TooFewCities { n: self.size });
        }
        for from in 0..self.size {
            for to in 0..self.size {
                let value = self.get(from, to);
                if !value.is_finite() {
                    return Err(AcoError::NonFiniteDistance { from, to });
                }
                if from == to {
                    if value != 0.0 {
                        return Err(AcoError::NonZeroDiagonal { index: from, value });
                    }
                } else if value <= 0.0 {
                    return Err(AcoError::NonPositiveDistance { from, to, value });
                }
            }
        }
        Ok(())
    }

    /// Returns the distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns the distances out of city `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterates the undirected weighted edges `(i, j, d)` with `i < j`.
    ///
    /// Uses the upper triangle, which is what a graph renderer of the
    /// (intended symmetric) instance consumes.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.size)
            .flat_map(move |i| ((i + 1)..self.size).map(move |j| (i, j, self.get(i, j))))
    }

    /// Returns `true` if `d[i][j] == d[j][i]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        self.edges().all(|(i, j, d)| self.get(j, i) == d)
    }
}

/// Inverse-distance desirability: `eta[i][j] = 1 / d[i][j]`, `eta[i][i] = 0`.
#[derive(Debug, Clone)]
pub struct HeuristicMatrix {
    data: Vec<f64>,
    size: usize,
}

impl HeuristicMatrix {
    /// Derives the heuristic from a validated distance matrix.
    pub fn from_distances(distances: &DistanceMatrix) -> Self {
        let size = distances.size();
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for j in 0..size {
                if i != j {
                    data[i * size + j] = 1.0 / distances.get(i, j);
                }
            }
        }
        Self { data, size }
    }

    /// Returns the desirability of moving from `from` to `to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns the unmasked desirabilities out of city `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Writes row `current` into `out` with every visited column zeroed.
    ///
    /// Equivalent to zeroing the columns of visited cities in a working
    /// copy of the full matrix, without copying N² values per ant.
    ///
    /// # Panics
    ///
    /// Panics if `visited` or `out` do not have length N.
    pub fn masked_row(&self, current: usize, visited: &[bool], out: &mut [f64]) {
        assert_eq!(visited.len(), self.size, "visited mask has wrong length");
        assert_eq!(out.len(), self.size, "output row has wrong length");
        for ((slot, &eta), &seen) in out.iter_mut().zip(self.row(current)).zip(visited) {
            *slot = if seen { 0.0 } else { eta };
        }
    }
}

/// Pheromone trail strengths, indexed `[from][to]`.
///
/// Deposits are directional: reinforcing `(a, b)` leaves `(b, a)`
/// unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Seeds every entry independently and uniformly from `[0, 1)`.
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Self {
        let data = (0..size * size).map(|_| rng.random::<f64>()).collect();
        Self { data, size }
    }

    /// Creates a matrix with every entry set to `value`.
    pub fn filled(size: usize, value: f64) -> Self {
        Self {
            data: vec![value; size * size],
            size,
        }
    }

    /// Returns the trail strength on the step `from -> to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns the trail strengths out of city `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Scales every entry by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = 1.0 - rho;
        for tau in &mut self.data {
            *tau *= keep;
        }
    }

    /// Adds `amount` to every traversed `(tour[k-1], tour[k])` entry.
    pub fn deposit(&mut self, tour: &[usize], amount: f64) {
        for step in tour.windows(2) {
            self.data[step[0] * self.size + step[1]] += amount;
        }
    }

    /// Smallest entry, or `+inf` for an empty matrix.
    pub fn min_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }
}
