//! Ant Colony Optimization (Ant System) for the symmetric TSP.
//!
//! A colony of ants repeatedly builds closed tours starting at city 0.
//! Each step picks the next city with probability proportional to
//! `pheromone^alpha * (1/distance)^beta`. After every iteration the
//! pheromone evaporates and each tour deposits `Q / length` along the
//! steps it took, biasing later ants towards short tours.
//!
//! # Key Types
//!
//! - [`DistanceMatrix`]: validated problem input
//! - [`AcoConfig`]: algorithm parameters and termination limits
//! - [`AcoRunner`]: executes the colony loop
//! - [`AcoResult`]: best tour, its cost, and run statistics
//!
//! The building blocks ([`TourBuilder`], [`transition_probabilities`],
//! [`select_next_city`], [`update_pheromones`]) are public so custom
//! loops can reuse them.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*, MIT Press

mod config;
mod construction;
mod matrix;
mod pheromone;
mod runner;
mod transition;
mod types;

pub use config::AcoConfig;
pub use construction::{AntTour, TourBuilder};
pub use matrix::{DistanceMatrix, HeuristicMatrix, PheromoneMatrix};
pub use pheromone::{update_pheromones, IterationSummary};
pub use runner::{AcoResult, AcoRunner, Termination};
pub use transition::{select_next_city, transition_probabilities, Sampling};
pub use types::{is_valid_tour, tour_cost, BestTour, Tour};
