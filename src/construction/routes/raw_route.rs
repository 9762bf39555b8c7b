#[cfg(test)]
#[path = "../../../tests/unit/construction/routes/raw_route_test.rs"]
mod raw_route_test;

use crate::construction::routes::Route;
use crate::models::common::{Amount, Cost};
use crate::models::Input;

/// A route representation which tracks load incrementally: the vehicle leaves
/// with all deliveries on board, drops them along the way and accumulates
/// pickups. Derived arrays let capacity feasibility of hypothetical changes
/// be answered in O(dim) per query.
pub struct RawRoute {
    vehicle_rank: usize,

    /// Job ranks in service order.
    pub(crate) route: Vec<usize>,

    /// current_loads[i] is the load carried on the leg arriving at position
    /// `i`; the last entry is the load after the final position.
    current_loads: Vec<Amount>,

    /// fwd_pickups[i] is the total pickup amount of positions `[0, i)`.
    fwd_pickups: Vec<Amount>,

    /// bwd_deliveries[i] is the total delivery amount of positions `[i, n)`.
    bwd_deliveries: Vec<Amount>,

    /// fwd_peaks[i] is the component-wise maximum of current_loads[0..=i]:
    /// the margin left for extra deliveries anywhere before position `i`.
    fwd_peaks: Vec<Amount>,

    /// bwd_peaks[i] is the component-wise maximum of current_loads[i..]: the
    /// margin left for extra pickups anywhere at or after position `i`.
    bwd_peaks: Vec<Amount>,
}

impl RawRoute {
    /// Creates an empty route operated by the given vehicle.
    pub fn new(input: &Input, vehicle_rank: usize) -> Self {
        let zero = input.zero_amount();
        Self {
            vehicle_rank,
            route: vec![],
            current_loads: vec![zero.clone()],
            fwd_pickups: vec![zero.clone()],
            bwd_deliveries: vec![zero.clone()],
            fwd_peaks: vec![zero.clone()],
            bwd_peaks: vec![zero],
        }
    }

    /// Returns the rank of the vehicle operating this route.
    pub fn vehicle_rank(&self) -> usize {
        self.vehicle_rank
    }

    /// Returns job ranks in service order.
    pub fn job_ranks(&self) -> &[usize] {
        &self.route
    }

    /// Checks whether the route serves no jobs.
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    /// Returns the number of served jobs.
    pub fn len(&self) -> usize {
        self.route.len()
    }

    /// Returns the load carried on each leg, one entry per leg plus the final
    /// load after the last position.
    pub fn current_loads(&self) -> &[Amount] {
        &self.current_loads
    }

    /// Recomputes all derived arrays from the job sequence.
    pub fn update_amounts(&mut self, input: &Input) {
        let size = self.route.len();
        let zero = input.zero_amount();

        self.fwd_pickups.clear();
        let mut total = zero.clone();
        self.fwd_pickups.push(total.clone());
        for &job_rank in &self.route {
            total += &input.jobs[job_rank].pickup;
            self.fwd_pickups.push(total.clone());
        }

        self.bwd_deliveries.clear();
        self.bwd_deliveries.resize(size + 1, zero);
        for rank in (0..size).rev() {
            self.bwd_deliveries[rank] =
                self.bwd_deliveries[rank + 1].clone() + &input.jobs[self.route[rank]].delivery;
        }

        self.current_loads.clear();
        self.current_loads.extend(
            self.fwd_pickups
                .iter()
                .zip(self.bwd_deliveries.iter())
                .map(|(pickups, deliveries)| pickups.clone() + deliveries),
        );

        self.fwd_peaks.clear();
        self.fwd_peaks.push(self.current_loads[0].clone());
        for rank in 1..=size {
            let peak = self.fwd_peaks[rank - 1].component_max(&self.current_loads[rank]);
            self.fwd_peaks.push(peak);
        }

        self.bwd_peaks.clear();
        self.bwd_peaks.resize(size + 1, self.current_loads[size].clone());
        for rank in (0..size).rev() {
            self.bwd_peaks[rank] = self.bwd_peaks[rank + 1].component_max(&self.current_loads[rank]);
        }
    }

    /// Checks whether inserting a single job with the given amounts at `rank`
    /// keeps the load within the vehicle capacity at every position: the new
    /// delivery is carried on all legs before `rank`, the new pickup on all
    /// legs after it.
    pub fn is_valid_addition_for_capacity(
        &self,
        input: &Input,
        pickup: &Amount,
        delivery: &Amount,
        rank: usize,
    ) -> bool {
        debug_assert!(rank <= self.route.len());
        let capacity = &input.vehicles[self.vehicle_rank].capacity;

        capacity.can_fit(&(self.fwd_peaks[rank].clone() + delivery))
            && capacity.can_fit(&(self.bwd_peaks[rank].clone() + pickup))
    }

    /// A cheap necessary condition for replacing positions `[first, last)`
    /// with a sequence of the given total pickup and delivery: the legs
    /// outside the replaced span must still fit. A positive answer has to be
    /// confirmed with [`Self::is_valid_addition_for_capacity_inclusion`].
    pub fn is_valid_addition_for_capacity_margins(
        &self,
        input: &Input,
        pickup: &Amount,
        delivery: &Amount,
        first: usize,
        last: usize,
    ) -> bool {
        debug_assert!(first <= last && last <= self.route.len());
        let capacity = &input.vehicles[self.vehicle_rank].capacity;

        let removed_delivery = self.delivery_in_range(first, last);
        let removed_pickup = self.pickup_in_range(first, last);

        (capacity.clone() + &removed_delivery).can_fit(&(self.fwd_peaks[first].clone() + delivery))
            && (capacity.clone() + &removed_pickup).can_fit(&(self.bwd_peaks[last].clone() + pickup))
    }

    /// An exact check for replacing positions `[first, last)` with the given
    /// external job sequence, walking the hypothetical loads without
    /// materializing the route. `delivery` is the total delivery amount of
    /// the sequence; the iterator may yield the sequence in either direction.
    pub fn is_valid_addition_for_capacity_inclusion<I>(
        &self,
        input: &Input,
        delivery: &Amount,
        sequence: I,
        first: usize,
        last: usize,
    ) -> bool
    where
        I: IntoIterator<Item = usize>,
    {
        debug_assert!(first <= last && last <= self.route.len());
        let capacity = &input.vehicles[self.vehicle_rank].capacity;

        let mut current_load =
            self.current_loads[first].clone() + delivery - &self.delivery_in_range(first, last);
        let mut valid = capacity.can_fit(&current_load);

        for job_rank in sequence {
            if !valid {
                break;
            }
            let job = &input.jobs[job_rank];
            current_load += &job.pickup;
            current_load -= &job.delivery;
            valid = capacity.can_fit(&current_load);
        }

        valid
    }

    /// Inserts the given job at `rank`.
    pub fn add(&mut self, input: &Input, job_rank: usize, rank: usize) {
        debug_assert!(rank <= self.route.len());
        self.route.insert(rank, job_rank);
        self.update_amounts(input);
    }

    /// Removes `count` consecutive jobs starting at `rank`.
    pub fn remove(&mut self, input: &Input, rank: usize, count: usize) {
        debug_assert!(rank + count <= self.route.len());
        self.route.drain(rank..rank + count);
        self.update_amounts(input);
    }

    /// Replaces positions `[first, last)` with the given job sequence.
    pub fn replace(&mut self, input: &Input, sequence: &[usize], first: usize, last: usize) {
        debug_assert!(first <= last && last <= self.route.len());
        self.route.splice(first..last, sequence.iter().copied());
        self.update_amounts(input);
    }

    /// Returns the total travel cost of the route, skipping absent depots.
    pub fn cost(&self, input: &Input) -> Cost {
        let matrix = input.get_matrix();
        let vehicle = &input.vehicles[self.vehicle_rank];
        let location = |rank: usize| input.jobs[self.route[rank]].location;

        let (Some(&first), Some(&last)) = (self.route.first(), self.route.last()) else {
            return 0;
        };

        let start = vehicle.start.map_or(0, |loc| matrix[loc][input.jobs[first].location]);
        let end = vehicle.end.map_or(0, |loc| matrix[input.jobs[last].location][loc]);
        let legs =
            (1..self.route.len()).map(|rank| matrix[location(rank - 1)][location(rank)]).sum::<Cost>();

        start + legs + end
    }

    fn pickup_in_range(&self, first: usize, last: usize) -> Amount {
        self.fwd_pickups[last].clone() - &self.fwd_pickups[first]
    }

    fn delivery_in_range(&self, first: usize, last: usize) -> Amount {
        self.bwd_deliveries[first].clone() - &self.bwd_deliveries[last]
    }
}

impl Route for RawRoute {
    fn empty(input: &Input, vehicle_rank: usize) -> Self {
        RawRoute::new(input, vehicle_rank)
    }

    fn vehicle_rank(&self) -> usize {
        RawRoute::vehicle_rank(self)
    }

    fn job_ranks(&self) -> &[usize] {
        RawRoute::job_ranks(self)
    }

    fn is_valid_addition_for_capacity(
        &self,
        input: &Input,
        pickup: &Amount,
        delivery: &Amount,
        rank: usize,
    ) -> bool {
        RawRoute::is_valid_addition_for_capacity(self, input, pickup, delivery, rank)
    }

    fn add(&mut self, input: &Input, job_rank: usize, rank: usize) {
        RawRoute::add(self, input, job_rank, rank)
    }

    fn remove(&mut self, input: &Input, rank: usize, count: usize) {
        RawRoute::remove(self, input, rank, count)
    }
}
