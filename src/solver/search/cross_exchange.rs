#[cfg(test)]
#[path = "../../../tests/unit/solver/search/cross_exchange_test.rs"]
mod cross_exchange_test;

use crate::construction::routes::RawRoute;
use crate::models::common::Gain;
use crate::models::Input;
use crate::solver::SolutionState;

/// An inter-route operator which swaps one edge (two consecutive jobs)
/// between two distinct vehicles' routes, independently considering both
/// orientations of each edge.
///
/// The workflow is: [`CrossExchange::gain_upper_bound`] bounds the best
/// achievable gain in O(1) from the solution state; when the bound is worth
/// pursuing, [`CrossExchange::is_valid`] queries the routes' capacity
/// inclusion oracles in both directions; [`CrossExchange::compute_gain`]
/// combines the best feasible orientation per side; [`CrossExchange::apply`]
/// performs the swap in place.
pub struct CrossExchange {
    s_vehicle: usize,
    s_rank: usize,
    t_vehicle: usize,
    t_rank: usize,

    normal_s_gain: Gain,
    reversed_s_gain: Gain,
    normal_t_gain: Gain,
    reversed_t_gain: Gain,
    gain_upper_bound_computed: bool,

    s_is_normal_valid: bool,
    s_is_reverse_valid: bool,
    t_is_normal_valid: bool,
    t_is_reverse_valid: bool,

    /// Whether the source edge is reversed when placed in the target route.
    pub reverse_s_edge: bool,
    /// Whether the target edge is reversed when placed in the source route.
    pub reverse_t_edge: bool,
}

impl CrossExchange {
    /// Creates a new instance of `CrossExchange` for the edges starting at
    /// `s_rank` and `t_rank` of the given routes.
    pub fn new(source: &RawRoute, s_rank: usize, target: &RawRoute, t_rank: usize) -> Self {
        debug_assert!(source.vehicle_rank() != target.vehicle_rank());
        debug_assert!(source.len() >= 2 && s_rank < source.len() - 1);
        debug_assert!(target.len() >= 2 && t_rank < target.len() - 1);

        Self {
            s_vehicle: source.vehicle_rank(),
            s_rank,
            t_vehicle: target.vehicle_rank(),
            t_rank,
            normal_s_gain: 0,
            reversed_s_gain: 0,
            normal_t_gain: 0,
            reversed_t_gain: 0,
            gain_upper_bound_computed: false,
            s_is_normal_valid: false,
            s_is_reverse_valid: false,
            t_is_normal_valid: false,
            t_is_reverse_valid: false,
            reverse_s_edge: false,
            reverse_t_edge: false,
        }
    }

    /// Returns an upper bound of the achievable gain in O(1), summing the
    /// per-side maxima over both orientations. Per side, the gain of the
    /// swap is the cached cost of the edges adjacent to the outgoing edge
    /// minus the new adjacent edges towards the incoming one; internal edge
    /// costs cancel across the two sides except for the reversal asymmetry.
    pub fn gain_upper_bound(
        &mut self,
        input: &Input,
        state: &SolutionState,
        source: &RawRoute,
        target: &RawRoute,
    ) -> Gain {
        let matrix = input.get_matrix();
        let location = |route: &RawRoute, rank: usize| input.jobs[route.job_ranks()[rank]].location;

        let s_location = location(source, self.s_rank);
        let s_after_location = location(source, self.s_rank + 1);
        let t_location = location(target, self.t_rank);
        let t_after_location = location(target, self.t_rank + 1);

        let side = |route: &RawRoute,
                    vehicle_rank: usize,
                    rank: usize,
                    in_location: usize,
                    in_after_location: usize| {
            let vehicle = &input.vehicles[vehicle_rank];
            let previous =
                if rank == 0 { vehicle.start } else { Some(location(route, rank - 1)) };
            let next = if rank == route.len() - 2 { vehicle.end } else { Some(location(route, rank + 2)) };

            let previous_cost = previous.map_or(0, |loc| matrix[loc][in_location]);
            let reverse_previous_cost = previous.map_or(0, |loc| matrix[loc][in_after_location]);
            let next_cost = next.map_or(0, |loc| matrix[in_after_location][loc]);
            let reverse_next_cost = next.map_or(0, |loc| matrix[in_location][loc]);

            let around = state.edge_costs_around_edge[vehicle_rank][rank];
            let reverse_edge_cost =
                matrix[in_location][in_after_location] - matrix[in_after_location][in_location];

            (
                around - previous_cost - next_cost,
                around + reverse_edge_cost - reverse_previous_cost - reverse_next_cost,
            )
        };

        (self.normal_s_gain, self.reversed_s_gain) =
            side(source, self.s_vehicle, self.s_rank, t_location, t_after_location);
        (self.normal_t_gain, self.reversed_t_gain) =
            side(target, self.t_vehicle, self.t_rank, s_location, s_after_location);

        self.gain_upper_bound_computed = true;

        self.normal_s_gain.max(self.reversed_s_gain) + self.normal_t_gain.max(self.reversed_t_gain)
    }

    /// Checks whether the swap is feasible, recording which orientations
    /// pass the capacity oracles of each route.
    pub fn is_valid(&mut self, input: &Input, source: &RawRoute, target: &RawRoute) -> bool {
        let s_edge = [source.job_ranks()[self.s_rank], source.job_ranks()[self.s_rank + 1]];
        let t_edge = [target.job_ranks()[self.t_rank], target.job_ranks()[self.t_rank + 1]];

        let mut valid = s_edge
            .iter()
            .all(|&job_rank| input.vehicle_ok_with_job(self.t_vehicle, job_rank))
            && t_edge.iter().all(|&job_rank| input.vehicle_ok_with_job(self.s_vehicle, job_rank));

        let edge_pickup = |edge: &[usize; 2]| {
            input.jobs[edge[0]].pickup.clone() + &input.jobs[edge[1]].pickup
        };
        let edge_delivery = |edge: &[usize; 2]| {
            input.jobs[edge[0]].delivery.clone() + &input.jobs[edge[1]].delivery
        };

        let t_pickup = edge_pickup(&t_edge);
        let t_delivery = edge_delivery(&t_edge);
        valid = valid
            && source.is_valid_addition_for_capacity_margins(
                input,
                &t_pickup,
                &t_delivery,
                self.s_rank,
                self.s_rank + 2,
            );

        if valid {
            self.s_is_normal_valid = source.is_valid_addition_for_capacity_inclusion(
                input,
                &t_delivery,
                t_edge.iter().copied(),
                self.s_rank,
                self.s_rank + 2,
            );
            self.s_is_reverse_valid = source.is_valid_addition_for_capacity_inclusion(
                input,
                &t_delivery,
                t_edge.iter().rev().copied(),
                self.s_rank,
                self.s_rank + 2,
            );
            valid = self.s_is_normal_valid || self.s_is_reverse_valid;
        }

        let s_pickup = edge_pickup(&s_edge);
        let s_delivery = edge_delivery(&s_edge);
        valid = valid
            && target.is_valid_addition_for_capacity_margins(
                input,
                &s_pickup,
                &s_delivery,
                self.t_rank,
                self.t_rank + 2,
            );

        if valid {
            self.t_is_normal_valid = target.is_valid_addition_for_capacity_inclusion(
                input,
                &s_delivery,
                s_edge.iter().copied(),
                self.t_rank,
                self.t_rank + 2,
            );
            self.t_is_reverse_valid = target.is_valid_addition_for_capacity_inclusion(
                input,
                &s_delivery,
                s_edge.iter().rev().copied(),
                self.t_rank,
                self.t_rank + 2,
            );
            valid = self.t_is_normal_valid || self.t_is_reverse_valid;
        }

        valid
    }

    /// Combines the per-side gains using the best feasible orientation of
    /// each side, preferring the higher-gain orientation where both are
    /// feasible. Only valid after [`Self::gain_upper_bound`] and a positive
    /// [`Self::is_valid`].
    pub fn compute_gain(&mut self) -> Gain {
        debug_assert!(self.gain_upper_bound_computed);
        debug_assert!(self.s_is_normal_valid || self.s_is_reverse_valid);
        debug_assert!(self.t_is_normal_valid || self.t_is_reverse_valid);

        let mut gain = 0;

        if self.reversed_s_gain > self.normal_s_gain {
            if self.s_is_reverse_valid {
                gain += self.reversed_s_gain;
                self.reverse_t_edge = true;
            } else {
                gain += self.normal_s_gain;
            }
        } else if self.s_is_normal_valid {
            gain += self.normal_s_gain;
        } else {
            gain += self.reversed_s_gain;
            self.reverse_t_edge = true;
        }

        if self.reversed_t_gain > self.normal_t_gain {
            if self.t_is_reverse_valid {
                gain += self.reversed_t_gain;
                self.reverse_s_edge = true;
            } else {
                gain += self.normal_t_gain;
            }
        } else if self.t_is_normal_valid {
            gain += self.normal_t_gain;
        } else {
            gain += self.reversed_t_gain;
            self.reverse_s_edge = true;
        }

        gain
    }

    /// Swaps the two edges in place, reversing where [`Self::compute_gain`]
    /// decided to, and re-establishes both routes' derived arrays.
    pub fn apply(&self, input: &Input, source: &mut RawRoute, target: &mut RawRoute) {
        std::mem::swap(&mut source.route[self.s_rank], &mut target.route[self.t_rank]);
        std::mem::swap(&mut source.route[self.s_rank + 1], &mut target.route[self.t_rank + 1]);

        if self.reverse_s_edge {
            target.route.swap(self.t_rank, self.t_rank + 1);
        }
        if self.reverse_t_edge {
            source.route.swap(self.s_rank, self.s_rank + 1);
        }

        source.update_amounts(input);
        target.update_amounts(input);
    }

    /// Returns the vehicle ranks whose solution state has to be refreshed
    /// after the move is applied.
    pub fn update_candidates(&self) -> [usize; 2] {
        [self.s_vehicle, self.t_vehicle]
    }
}
