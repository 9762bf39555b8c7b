#[cfg(test)]
#[path = "../../tests/unit/solver/state_test.rs"]
mod state_test;

use crate::construction::routes::Route;
use crate::models::common::Gain;
use crate::models::Input;
use crate::utils::parallel_collect;

/// Caches per-route cost information consumed by local search operators in
/// O(1). The caches are refreshed after any accepted batch of moves over the
/// affected vehicles; they are read-only snapshots in between.
pub struct SolutionState {
    /// For each vehicle and each edge rank, the summed cost of the two edges
    /// adjacent to the edge starting at that rank, using the vehicle start
    /// and end where the edge touches a route boundary (zero when the depot
    /// is absent).
    pub edge_costs_around_edge: Vec<Vec<Gain>>,

    /// For each vehicle and position, the gain obtained by removing the
    /// single job at that position.
    pub node_gains: Vec<Vec<Gain>>,

    /// For each vehicle and edge rank, the gain obtained by removing the two
    /// consecutive jobs starting at that rank.
    pub edge_gains: Vec<Vec<Gain>>,

    /// For each job, all other job ranks ordered by increasing travel cost
    /// from it, used for operator candidate generation.
    pub nearest_jobs: Vec<Vec<usize>>,
}

struct RouteCache {
    edge_costs_around_edge: Vec<Gain>,
    node_gains: Vec<Gain>,
    edge_gains: Vec<Gain>,
}

impl SolutionState {
    /// Creates a new instance of `SolutionState` with empty per-route caches
    /// and nearest-job lists derived from the instance.
    pub fn new(input: &Input) -> Self {
        let job_ranks: Vec<usize> = (0..input.jobs.len()).collect();
        let nearest_jobs = parallel_collect(&job_ranks, |&job_rank| {
            let matrix = input.get_matrix();
            let from = input.jobs[job_rank].location;

            let mut others: Vec<usize> =
                (0..input.jobs.len()).filter(|&other| other != job_rank).collect();
            others.sort_by_key(|&other| matrix[from][input.jobs[other].location]);

            others
        });

        Self {
            edge_costs_around_edge: vec![vec![]; input.vehicles.len()],
            node_gains: vec![vec![]; input.vehicles.len()],
            edge_gains: vec![vec![]; input.vehicles.len()],
            nearest_jobs,
        }
    }

    /// Refreshes the per-route caches for all given routes.
    pub fn setup<R: Route + Send + Sync>(&mut self, input: &Input, routes: &[R]) {
        let caches = parallel_collect(routes, |route| compute_route_cache(input, route));

        for (route, cache) in routes.iter().zip(caches) {
            self.assign(route.vehicle_rank(), cache);
        }
    }

    /// Refreshes the per-route caches of a single vehicle.
    pub fn update_route<R: Route>(&mut self, input: &Input, route: &R) {
        self.assign(route.vehicle_rank(), compute_route_cache(input, route));
    }

    fn assign(&mut self, vehicle_rank: usize, cache: RouteCache) {
        self.edge_costs_around_edge[vehicle_rank] = cache.edge_costs_around_edge;
        self.node_gains[vehicle_rank] = cache.node_gains;
        self.edge_gains[vehicle_rank] = cache.edge_gains;
    }
}

fn compute_route_cache<R: Route>(input: &Input, route: &R) -> RouteCache {
    let matrix = input.get_matrix();
    let vehicle = &input.vehicles[route.vehicle_rank()];
    let ranks = route.job_ranks();
    let size = ranks.len();

    let location = |rank: usize| input.jobs[ranks[rank]].location;
    let previous = |rank: usize| if rank == 0 { vehicle.start } else { Some(location(rank - 1)) };
    let next = |rank: usize| if rank + 1 == size { vehicle.end } else { Some(location(rank + 1)) };

    let node_gains = (0..size)
        .map(|rank| {
            let removed = previous(rank).map_or(0, |loc| matrix[loc][location(rank)])
                + next(rank).map_or(0, |loc| matrix[location(rank)][loc]);
            let added = previous(rank).zip(next(rank)).map_or(0, |(from, to)| matrix[from][to]);

            removed - added
        })
        .collect();

    let edge_ranks = size.saturating_sub(1);
    let edge_costs_around_edge: Vec<Gain> = (0..edge_ranks)
        .map(|rank| {
            previous(rank).map_or(0, |loc| matrix[loc][location(rank)])
                + next(rank + 1).map_or(0, |loc| matrix[location(rank + 1)][loc])
        })
        .collect();

    let edge_gains = (0..edge_ranks)
        .map(|rank| {
            let added =
                previous(rank).zip(next(rank + 1)).map_or(0, |(from, to)| matrix[from][to]);

            edge_costs_around_edge[rank] + matrix[location(rank)][location(rank + 1)] - added
        })
        .collect();

    RouteCache { edge_costs_around_edge, node_gains, edge_gains }
}
