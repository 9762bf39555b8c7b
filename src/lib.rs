//! Building blocks of a solver for the Vehicle Routing Problem with capacities
//! and time windows (CVRP/VRPTW).
//!
//! The crate covers the constructive part of such a solver:
//!
//! - [`models`] defines the immutable problem instance: jobs, vehicles, the
//!   travel matrix and the multi-dimensional load model.
//! - [`construction`] provides route representations which answer capacity and
//!   time-window feasibility queries for hypothetical insertions in tight
//!   loops, and the insertion heuristics built on top of them.
//! - [`solver`] contains the caches and a representative inter-route operator
//!   used by a local search layered above construction.
//!
//! A solution is built one route per vehicle; jobs which cannot be inserted
//! feasibly are simply left unassigned, which is a normal outcome rather than
//! an error.
//!
//! # Examples
//!
//! ```
//! use vrptw_core::prelude::*;
//!
//! let matrix = Matrix::from_fn(3, |i, j| (i as Cost - j as Cost).abs());
//! let jobs = vec![
//!     Job::new(1, 1, Amount::new(vec![1]), Amount::new(vec![0]), 0, vec![TimeWindow::new(0, 100)]),
//!     Job::new(2, 2, Amount::new(vec![1]), Amount::new(vec![0]), 0, vec![TimeWindow::new(0, 100)]),
//! ];
//! let vehicles =
//!     vec![Vehicle::new(1, Some(0), None, Amount::new(vec![10]), TimeWindow::new(0, 100))];
//!
//! let input = Input::new(jobs, vehicles, matrix)?;
//! let routes: Vec<TwRoute> = solve(&input, Strategy::Basic, Init::Nearest, 0.);
//!
//! assert_eq!(routes.len(), 1);
//! assert_eq!(routes[0].job_ranks(), &[0, 1]);
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod prelude;

pub mod construction;
pub mod models;
pub mod solver;
pub mod utils;
