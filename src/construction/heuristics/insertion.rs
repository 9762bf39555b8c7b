#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/insertion_test.rs"]
mod insertion_test;

use crate::construction::heuristics::{addition_cost, empty_route_cost};
use crate::construction::routes::Route;
use crate::models::common::{Cost, Duration};
use crate::models::Input;
use std::collections::BTreeSet;

/// Specifies how a vehicle's route is optionally seeded with one job before
/// the greedy insertion loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Init {
    /// No seeding, fall through to the greedy loop.
    None,
    /// Seed with a job whose pickup or delivery dominates all candidates.
    HigherAmount,
    /// Seed with the job whose last time window closes first.
    EarliestDeadline,
    /// Seed with the job of largest empty-route cost.
    Furthest,
    /// Seed with the job of smallest empty-route cost.
    Nearest,
}

/// Selects the insertion strategy used to construct routes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strategy {
    /// Vehicles are processed in a fixed order decided up-front.
    Basic,
    /// The next vehicle is elected each round from the remaining ones.
    DynamicVehicleChoice,
}

/// Builds one route per vehicle, processing vehicles in a fixed order:
/// dominating capacity first, longer working window on capacity ties,
/// incomparable pairs keeping their input order. The reference cost tilting
/// the insertion score is the empty-route cost of serving a job from the
/// first vehicle, which is exact for homogeneous fleets and a documented
/// approximation otherwise.
pub fn basic<R: Route>(input: &Input, init: Init, lambda: f64) -> Vec<R> {
    let mut routes: Vec<R> =
        (0..input.vehicles.len()).map(|vehicle_rank| R::empty(input, vehicle_rank)).collect();
    if input.vehicles.is_empty() {
        return routes;
    }

    let mut unassigned: BTreeSet<usize> = (0..input.jobs.len()).collect();
    let costs: Vec<Cost> = (0..input.jobs.len())
        .map(|job_rank| empty_route_cost(input, job_rank, &input.vehicles[0]))
        .collect();

    for vehicle_rank in descending_fleet_order(input) {
        let route = &mut routes[vehicle_rank];

        if let Some(job_rank) =
            seed_route(input, route, vehicle_rank, &unassigned, init, &|job_rank| costs[job_rank], &|_| true)
        {
            unassigned.remove(&job_rank);
        }

        fill_route(input, route, vehicle_rank, &mut unassigned, &|job_rank| costs[job_rank], lambda);
    }

    routes
}

/// Builds one route per vehicle, electing each round the remaining vehicle
/// which is the cheapest option for the largest number of unassigned jobs.
/// The reference cost of a job is its regret: the cheapest empty-route cost
/// among the other remaining vehicles, so jobs which would become expensive
/// once this vehicle is gone are taken early.
pub fn dynamic_vehicle_choice<R: Route>(input: &Input, init: Init, lambda: f64) -> Vec<R> {
    let mut routes: Vec<R> =
        (0..input.vehicles.len()).map(|vehicle_rank| R::empty(input, vehicle_rank)).collect();

    let mut unassigned: BTreeSet<usize> = (0..input.jobs.len()).collect();
    let mut vehicle_ranks: Vec<usize> = (0..input.vehicles.len()).collect();

    // costs[j][v] is the cost of serving job j alone in an empty route of
    // vehicle v.
    let costs: Vec<Vec<Cost>> = (0..input.jobs.len())
        .map(|job_rank| {
            input.vehicles.iter().map(|vehicle| empty_route_cost(input, job_rank, vehicle)).collect()
        })
        .collect();

    while !vehicle_ranks.is_empty() && !unassigned.is_empty() {
        let mut min_costs = vec![Cost::MAX; input.jobs.len()];
        let mut second_min_costs = vec![Cost::MAX; input.jobs.len()];
        for &job_rank in &unassigned {
            for &vehicle_rank in &vehicle_ranks {
                let cost = costs[job_rank][vehicle_rank];
                if cost <= min_costs[job_rank] {
                    second_min_costs[job_rank] = min_costs[job_rank];
                    min_costs[job_rank] = cost;
                } else if cost < second_min_costs[job_rank] {
                    second_min_costs[job_rank] = cost;
                }
            }
        }

        let mut closest_jobs = vec![0usize; input.vehicles.len()];
        for &job_rank in &unassigned {
            for &vehicle_rank in &vehicle_ranks {
                if costs[job_rank][vehicle_rank] == min_costs[job_rank] {
                    closest_jobs[vehicle_rank] += 1;
                }
            }
        }

        // The first minimum wins, so full ties deterministically pick the
        // vehicle listed earliest.
        let chosen = (1..vehicle_ranks.len()).fold(0, |best, idx| {
            if vehicle_precedes(input, &closest_jobs, vehicle_ranks[idx], vehicle_ranks[best]) {
                idx
            } else {
                best
            }
        });
        let vehicle_rank = vehicle_ranks.remove(chosen);

        let mut regrets = vec![Cost::MAX; input.jobs.len()];
        for &job_rank in &unassigned {
            regrets[job_rank] = if min_costs[job_rank] < costs[job_rank][vehicle_rank] {
                min_costs[job_rank]
            } else {
                second_min_costs[job_rank]
            };
        }

        let route = &mut routes[vehicle_rank];

        // Seeds are restricted to jobs for which no other remaining vehicle
        // is cheaper, so jobs are not hoarded away from vehicles still to be
        // processed.
        if let Some(job_rank) = seed_route(
            input,
            route,
            vehicle_rank,
            &unassigned,
            init,
            &|job_rank| costs[job_rank][vehicle_rank],
            &|job_rank| costs[job_rank][vehicle_rank] <= min_costs[job_rank],
        ) {
            unassigned.remove(&job_rank);
        }

        fill_route(input, route, vehicle_rank, &mut unassigned, &|job_rank| regrets[job_rank], lambda);
    }

    routes
}

/// Orders vehicle ranks for the `basic` strategy with a stable insertion
/// sort: capacity dominance is a partial order, so incomparable pairs must
/// keep their input order for the construction to be deterministic across
/// platforms.
fn descending_fleet_order(input: &Input) -> Vec<usize> {
    let precedes = |lhs: usize, rhs: usize| {
        let (v_lhs, v_rhs) = (&input.vehicles[lhs], &input.vehicles[rhs]);
        v_lhs.capacity.dominates(&v_rhs.capacity)
            || (v_lhs.capacity == v_rhs.capacity && v_lhs.tw.length() > v_rhs.tw.length())
    };

    let mut ranks: Vec<usize> = (0..input.vehicles.len()).collect();
    for idx in 1..ranks.len() {
        let mut slot = idx;
        while slot > 0 && precedes(ranks[slot], ranks[slot - 1]) {
            ranks.swap(slot, slot - 1);
            slot -= 1;
        }
    }

    ranks
}

fn vehicle_precedes(input: &Input, closest_jobs: &[usize], lhs: usize, rhs: usize) -> bool {
    let (v_lhs, v_rhs) = (&input.vehicles[lhs], &input.vehicles[rhs]);

    closest_jobs[lhs] > closest_jobs[rhs]
        || (closest_jobs[lhs] == closest_jobs[rhs]
            && (v_lhs.capacity.dominates(&v_rhs.capacity)
                || (v_lhs.capacity == v_rhs.capacity && v_lhs.tw.length() > v_rhs.tw.length())))
}

/// Scans eligible unassigned jobs for the best seed under the given policy
/// and inserts it at the route head. Returns the seeded job rank, if any. A
/// candidate must be compatible and pass both feasibility oracles for a
/// single-job route; on incomparable amount ties the earliest-ranked
/// candidate is kept, which the ordered scan makes deterministic.
fn seed_route<R: Route>(
    input: &Input,
    route: &mut R,
    vehicle_rank: usize,
    unassigned: &BTreeSet<usize>,
    init: Init,
    seed_cost: &dyn Fn(usize) -> Cost,
    is_eligible: &dyn Fn(usize) -> bool,
) -> Option<usize> {
    if init == Init::None {
        return None;
    }

    let mut best: Option<usize> = None;
    let mut higher_amount = input.zero_amount();
    let mut furthest_cost: Cost = 0;
    let mut nearest_cost = Cost::MAX;
    let mut earliest_deadline = Duration::MAX;

    for &job_rank in unassigned {
        let job = &input.jobs[job_rank];
        if !is_eligible(job_rank)
            || !input.vehicle_ok_with_job(vehicle_rank, job_rank)
            || !route.is_valid_addition_for_capacity(input, &job.pickup, &job.delivery, 0)
            || !route.is_valid_addition_for_tw(input, job_rank, 0)
        {
            continue;
        }

        match init {
            Init::None => unreachable!(),
            Init::HigherAmount => {
                if job.pickup.dominates(&higher_amount) {
                    higher_amount = job.pickup.clone();
                    best = Some(job_rank);
                }
                if job.delivery.dominates(&higher_amount) {
                    higher_amount = job.delivery.clone();
                    best = Some(job_rank);
                }
            }
            Init::EarliestDeadline => {
                let Some(deadline) = job.tws.last().map(|tw| tw.end) else { continue };
                if deadline < earliest_deadline {
                    earliest_deadline = deadline;
                    best = Some(job_rank);
                }
            }
            Init::Furthest => {
                if furthest_cost < seed_cost(job_rank) {
                    furthest_cost = seed_cost(job_rank);
                    best = Some(job_rank);
                }
            }
            Init::Nearest => {
                if seed_cost(job_rank) < nearest_cost {
                    nearest_cost = seed_cost(job_rank);
                    best = Some(job_rank);
                }
            }
        }
    }

    if let Some(job_rank) = best {
        route.add(input, job_rank, 0);
    }

    best
}

/// Repeatedly inserts the best compatible job at the best position until no
/// feasible insertion remains. The insertion score is the travel cost delta
/// minus `lambda` times the job's reference cost; the lowest score wins and
/// the first minimum is kept on ties.
fn fill_route<R: Route>(
    input: &Input,
    route: &mut R,
    vehicle_rank: usize,
    unassigned: &mut BTreeSet<usize>,
    reference_cost: &dyn Fn(usize) -> Cost,
    lambda: f64,
) {
    let vehicle = &input.vehicles[vehicle_rank];

    loop {
        let mut best_score = f64::MAX;
        let mut best_insertion: Option<(usize, usize)> = None;

        for &job_rank in unassigned.iter() {
            if !input.vehicle_ok_with_job(vehicle_rank, job_rank) {
                continue;
            }
            let job = &input.jobs[job_rank];

            for rank in 0..=route.job_ranks().len() {
                let addition =
                    addition_cost(input, job_rank, vehicle, route.job_ranks(), rank) as f64;
                let score = addition - lambda * reference_cost(job_rank) as f64;

                if score < best_score
                    && route.is_valid_addition_for_capacity(input, &job.pickup, &job.delivery, rank)
                    && route.is_valid_addition_for_tw(input, job_rank, rank)
                {
                    best_score = score;
                    best_insertion = Some((job_rank, rank));
                }
            }
        }

        match best_insertion {
            Some((job_rank, rank)) => {
                route.add(input, job_rank, rank);
                unassigned.remove(&job_rank);
            }
            None => break,
        }
    }
}
