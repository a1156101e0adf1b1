//! Ant Colony Optimization for the symmetric Traveling Salesman Problem.
//!
//! - [`aco`]: the Ant System solver, its matrices, transition rule,
//!   tour construction and pheromone update
//! - [`error`]: input and configuration errors
//! - [`random`]: seedable master and per-ant random streams
//!
//! # Example
//!
//! ```
//! use u_aco::aco::{AcoConfig, AcoRunner, DistanceMatrix};
//!
//! let dm = DistanceMatrix::from_off_diagonal(vec![
//!     vec![2.0, 9.0, 10.0],
//!     vec![2.0, 6.0, 4.0],
//!     vec![9.0, 6.0, 3.0],
//!     vec![10.0, 4.0, 3.0],
//! ])?;
//! let result = AcoRunner::run(&dm, &AcoConfig::fast().with_seed(1))?;
//! assert_eq!(result.best_tour.len(), 5);
//! # Ok::<(), u_aco::error::AcoError>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: construct the ants of an iteration on the rayon pool
//! - `serde`: `Serialize`/`Deserialize` for configs and results

pub mod aco;
pub mod error;
pub mod random;
