//! Insertion heuristics which build an initial feasible solution.

mod costs;
pub use self::costs::{addition_cost, empty_route_cost};

mod insertion;
pub use self::insertion::{basic, dynamic_vehicle_choice, Init, Strategy};

use crate::construction::routes::Route;
use crate::models::Input;
use crate::utils::{Environment, Timer};

/// Builds one route per vehicle with the given strategy, seeding policy and
/// regret parameter `lambda`. Jobs for which no feasible insertion remains
/// are left unassigned; this is a normal outcome, not an error.
pub fn solve<R: Route>(input: &Input, strategy: Strategy, init: Init, lambda: f64) -> Vec<R> {
    match strategy {
        Strategy::Basic => basic(input, init, lambda),
        Strategy::DynamicVehicleChoice => dynamic_vehicle_choice(input, init, lambda),
    }
}

/// Same as [`solve`], additionally reporting construction statistics through
/// the environment's logger.
pub fn solve_with_environment<R: Route>(
    input: &Input,
    environment: &Environment,
    strategy: Strategy,
    init: Init,
    lambda: f64,
) -> Vec<R> {
    let (routes, duration) = Timer::measure_duration(|| solve(input, strategy, init, lambda));

    let assigned = routes.iter().map(|route: &R| route.job_ranks().len()).sum::<usize>();
    (environment.logger)(&format!(
        "construction done in {}ms: {} of {} jobs assigned to {} vehicles",
        duration.as_millis(),
        assigned,
        input.jobs.len(),
        input.vehicles.len(),
    ));

    routes
}
