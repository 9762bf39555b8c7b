//! Constructive part of the solver: route representations with incremental
//! feasibility oracles and the insertion heuristics polling them.

pub mod heuristics;
pub mod routes;
