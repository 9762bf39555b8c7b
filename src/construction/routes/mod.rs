//! Route representations with incremental feasibility tracking.
//!
//! Two flavors share one capability set: [`RawRoute`] tracks capacity only
//! and is enough for CVRP, [`TwRoute`] additionally tracks time-window
//! feasibility for VRPTW. Construction heuristics are generic over the
//! [`Route`] trait, so the caller picks the flavor by type.

use crate::models::common::Amount;
use crate::models::Input;

mod raw_route;
pub use self::raw_route::RawRoute;

mod tw_route;
pub use self::tw_route::TwRoute;

/// A capability set shared by route representations consumed by insertion
/// heuristics. Validators are pure predicates; mutators require the caller to
/// have validated feasibility first and re-establish all derived state before
/// returning.
pub trait Route {
    /// Creates an empty route operated by the vehicle with the given rank.
    fn empty(input: &Input, vehicle_rank: usize) -> Self
    where
        Self: Sized;

    /// Returns the rank of the vehicle operating this route.
    fn vehicle_rank(&self) -> usize;

    /// Returns job ranks in service order.
    fn job_ranks(&self) -> &[usize];

    /// Checks whether inserting a single job with the given amounts at `rank`
    /// keeps the load within the vehicle capacity at every position.
    fn is_valid_addition_for_capacity(
        &self,
        input: &Input,
        pickup: &Amount,
        delivery: &Amount,
        rank: usize,
    ) -> bool;

    /// Checks whether inserting the given job at `rank` keeps the route
    /// schedulable. Flavors without schedule tracking accept any insertion.
    fn is_valid_addition_for_tw(&self, _input: &Input, _job_rank: usize, _rank: usize) -> bool {
        true
    }

    /// Inserts the given job at `rank`.
    fn add(&mut self, input: &Input, job_rank: usize, rank: usize);

    /// Removes `count` consecutive jobs starting at `rank`.
    fn remove(&mut self, input: &Input, rank: usize, count: usize);
}
