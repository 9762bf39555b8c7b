#[cfg(test)]
#[path = "../../../tests/unit/construction/routes/tw_route_test.rs"]
mod tw_route_test;

use crate::construction::routes::{RawRoute, Route};
use crate::models::common::{Amount, Duration, Location};
use crate::models::Input;

/// A route representation which tracks capacity and time-window feasibility.
///
/// On top of [`RawRoute`] it maintains, per position, the earliest and latest
/// feasible service start and the index of the job time window that service
/// falls into. `earliest` is propagated forward from the vehicle start,
/// `latest` backward from the vehicle end; a position is schedulable while
/// `earliest <= latest`. A job's window is chosen once at insertion: the
/// earliest window whose end still admits the forward arrival.
pub struct TwRoute {
    raw: RawRoute,
    earliest: Vec<Duration>,
    latest: Vec<Duration>,
    tw_ranks: Vec<usize>,
}

impl TwRoute {
    /// Creates an empty route operated by the given vehicle.
    pub fn new(input: &Input, vehicle_rank: usize) -> Self {
        Self { raw: RawRoute::new(input, vehicle_rank), earliest: vec![], latest: vec![], tw_ranks: vec![] }
    }

    /// Returns the underlying capacity-tracking route.
    pub fn raw(&self) -> &RawRoute {
        &self.raw
    }

    /// Returns the earliest feasible service start per position.
    pub fn earliest(&self) -> &[Duration] {
        &self.earliest
    }

    /// Returns the latest feasible service start per position.
    pub fn latest(&self) -> &[Duration] {
        &self.latest
    }

    /// Returns, per position, which of the job's time windows is active.
    pub fn tw_ranks(&self) -> &[usize] {
        &self.tw_ranks
    }

    /// Checks whether the given job can be inserted at `rank` with some
    /// choice of its time windows: forward propagation from the predecessor
    /// and the backward `latest` chain of the successor have to meet.
    pub fn is_valid_addition_for_tw(&self, input: &Input, job_rank: usize, rank: usize) -> bool {
        debug_assert!(rank <= self.raw.route.len());
        let job = &input.jobs[job_rank];
        let arrival = self.arrival_at(input, rank, job.location);

        match job.tws.iter().find(|tw| arrival <= tw.end) {
            Some(tw) => {
                let service_start = arrival.max(tw.start);
                service_start + job.service <= self.departure_deadline(input, rank, job.location)
            }
            None => false,
        }
    }

    /// Inserts the given job at `rank`, choosing its time window and
    /// re-propagating the schedule incrementally. The insertion has to be
    /// validated beforehand.
    pub fn add(&mut self, input: &Input, job_rank: usize, rank: usize) {
        debug_assert!(rank <= self.raw.route.len());
        let job = &input.jobs[job_rank];

        let arrival = self.arrival_at(input, rank, job.location);
        let tw_rank =
            job.tws.iter().position(|tw| arrival <= tw.end).unwrap_or(job.tws.len() - 1);
        debug_assert!(arrival <= job.tws[tw_rank].end);

        let tw = &job.tws[tw_rank];
        let service_start = arrival.max(tw.start);
        let deadline = self.departure_deadline(input, rank, job.location);
        debug_assert!(service_start + job.service <= deadline);

        self.raw.route.insert(rank, job_rank);
        self.raw.update_amounts(input);
        self.earliest.insert(rank, service_start);
        self.latest.insert(rank, tw.end.min(deadline - job.service));
        self.tw_ranks.insert(rank, tw_rank);

        self.fwd_propagate(input, rank + 1);
        self.bwd_propagate(input, rank);
    }

    /// Removes `count` consecutive jobs starting at `rank` and re-propagates
    /// the schedule around the cut.
    pub fn remove(&mut self, input: &Input, rank: usize, count: usize) {
        debug_assert!(rank + count <= self.raw.route.len());
        self.raw.route.drain(rank..rank + count);
        self.raw.update_amounts(input);
        self.earliest.drain(rank..rank + count);
        self.latest.drain(rank..rank + count);
        self.tw_ranks.drain(rank..rank + count);

        self.fwd_propagate(input, rank);
        self.bwd_propagate(input, rank);
    }

    /// Replaces positions `[first, last)` with the given job sequence and
    /// rebuilds the schedule, re-choosing job windows greedily forward. The
    /// replacement has to be validated beforehand.
    pub fn replace(&mut self, input: &Input, sequence: &[usize], first: usize, last: usize) {
        self.raw.replace(input, sequence, first, last);
        self.rebuild_schedule(input);
    }

    /// Earliest possible service start at `location` if it were placed at
    /// `rank`, before considering any of its own time windows.
    fn arrival_at(&self, input: &Input, rank: usize, location: Location) -> Duration {
        let matrix = input.get_matrix();
        let vehicle = &input.vehicles[self.raw.vehicle_rank()];

        if rank == 0 {
            match vehicle.start {
                Some(start) => vehicle.tw.start + matrix[start][location],
                None => vehicle.tw.start,
            }
        } else {
            let previous = &input.jobs[self.raw.route[rank - 1]];
            self.earliest[rank - 1] + previous.service + matrix[previous.location][location]
        }
    }

    /// Latest time service may end at `location` placed right before the
    /// position currently at `rank`, so that the rest of the route (or the
    /// vehicle end) stays reachable.
    fn departure_deadline(&self, input: &Input, rank: usize, location: Location) -> Duration {
        let matrix = input.get_matrix();
        let vehicle = &input.vehicles[self.raw.vehicle_rank()];

        if rank == self.raw.route.len() {
            match vehicle.end {
                Some(end) => vehicle.tw.end - matrix[location][end],
                None => vehicle.tw.end,
            }
        } else {
            self.latest[rank] - matrix[location][input.jobs[self.raw.route[rank]].location]
        }
    }

    /// Recomputes `earliest` from position `from` on, stopping as soon as a
    /// value is unaffected: the recurrence depends on the predecessor only,
    /// so an unchanged value absorbs the update.
    fn fwd_propagate(&mut self, input: &Input, from: usize) {
        for rank in from..self.raw.route.len() {
            let job = &input.jobs[self.raw.route[rank]];
            let arrival = self.arrival_at(input, rank, job.location);
            let earliest = arrival.max(job.tws[self.tw_ranks[rank]].start);

            if earliest == self.earliest[rank] {
                break;
            }
            debug_assert!(earliest <= self.latest[rank]);
            self.earliest[rank] = earliest;
        }
    }

    /// Recomputes `latest` for positions before `upto`, walking backward and
    /// stopping as soon as a value is unaffected.
    fn bwd_propagate(&mut self, input: &Input, upto: usize) {
        for rank in (0..upto.min(self.raw.route.len())).rev() {
            let job = &input.jobs[self.raw.route[rank]];
            let deadline = self.departure_deadline(input, rank + 1, job.location);
            let latest = job.tws[self.tw_ranks[rank]].end.min(deadline - job.service);

            if latest == self.latest[rank] {
                break;
            }
            debug_assert!(self.earliest[rank] <= latest);
            self.latest[rank] = latest;
        }
    }

    fn rebuild_schedule(&mut self, input: &Input) {
        let size = self.raw.route.len();

        self.earliest.clear();
        self.tw_ranks.clear();
        for rank in 0..size {
            let job = &input.jobs[self.raw.route[rank]];
            let arrival = self.arrival_at(input, rank, job.location);
            let tw_rank =
                job.tws.iter().position(|tw| arrival <= tw.end).unwrap_or(job.tws.len() - 1);
            debug_assert!(arrival <= job.tws[tw_rank].end);

            self.tw_ranks.push(tw_rank);
            self.earliest.push(arrival.max(job.tws[tw_rank].start));
        }

        self.latest.clear();
        self.latest.resize(size, 0);
        for rank in (0..size).rev() {
            let job = &input.jobs[self.raw.route[rank]];
            let deadline = self.departure_deadline(input, rank + 1, job.location);
            let latest = job.tws[self.tw_ranks[rank]].end.min(deadline - job.service);
            debug_assert!(self.earliest[rank] <= latest);

            self.latest[rank] = latest;
        }
    }
}

impl Route for TwRoute {
    fn empty(input: &Input, vehicle_rank: usize) -> Self {
        TwRoute::new(input, vehicle_rank)
    }

    fn vehicle_rank(&self) -> usize {
        self.raw.vehicle_rank()
    }

    fn job_ranks(&self) -> &[usize] {
        self.raw.job_ranks()
    }

    fn is_valid_addition_for_capacity(
        &self,
        input: &Input,
        pickup: &Amount,
        delivery: &Amount,
        rank: usize,
    ) -> bool {
        self.raw.is_valid_addition_for_capacity(input, pickup, delivery, rank)
    }

    fn is_valid_addition_for_tw(&self, input: &Input, job_rank: usize, rank: usize) -> bool {
        TwRoute::is_valid_addition_for_tw(self, input, job_rank, rank)
    }

    fn add(&mut self, input: &Input, job_rank: usize, rank: usize) {
        TwRoute::add(self, input, job_rank, rank)
    }

    fn remove(&mut self, input: &Input, rank: usize, count: usize) {
        TwRoute::remove(self, input, rank, count)
    }
}
