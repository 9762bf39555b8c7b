use crate::models::common::{Cost, Gain};
use crate::models::problem::Vehicle;
use crate::models::Input;

/// Returns the travel cost delta of inserting the given job at `rank` into
/// the route: the two added legs minus the replaced one, with legs to absent
/// depots dropped. The delta is signed as matrices are not required to be
/// metric.
pub fn addition_cost(
    input: &Input,
    job_rank: usize,
    vehicle: &Vehicle,
    route: &[usize],
    rank: usize,
) -> Gain {
    debug_assert!(rank <= route.len());
    let matrix = input.get_matrix();
    let job_location = input.jobs[job_rank].location;

    let previous =
        if rank == 0 { vehicle.start } else { Some(input.jobs[route[rank - 1]].location) };
    let next =
        if rank == route.len() { vehicle.end } else { Some(input.jobs[route[rank]].location) };

    let added = previous.map_or(0, |loc| matrix[loc][job_location])
        + next.map_or(0, |loc| matrix[job_location][loc]);
    let removed = previous.zip(next).map_or(0, |(from, to)| matrix[from][to]);

    added - removed
}

/// Returns the cost of serving the given job alone in an otherwise empty
/// route of the vehicle, with absent depot terms dropped.
pub fn empty_route_cost(input: &Input, job_rank: usize, vehicle: &Vehicle) -> Cost {
    let matrix = input.get_matrix();
    let job_location = input.jobs[job_rank].location;

    vehicle.start.map_or(0, |loc| matrix[loc][job_location])
        + vehicle.end.map_or(0, |loc| matrix[job_location][loc])
}
