#[cfg(test)]
#[path = "../../tests/unit/models/domain_test.rs"]
mod domain_test;

use crate::models::common::{Amount, Location};
use crate::models::problem::{Job, Vehicle};
use crate::models::Matrix;
use crate::utils::{GenericError, GenericResult};

/// Represents an immutable problem instance: jobs, vehicles and the travel
/// matrix they share. Once constructed it is read-only and safe to share
/// between concurrent solves.
pub struct Input {
    /// All jobs of the instance. Routes refer to jobs by their rank here.
    pub jobs: Vec<Job>,

    /// All vehicles of the instance.
    pub vehicles: Vec<Vehicle>,

    matrix: Matrix,
    amount_size: usize,
    compatibility: Vec<bool>,
}

impl Input {
    /// Creates a new instance of `Input`, validating its consistency. All
    /// checks happen here so that solving can assume a well-formed instance.
    pub fn new(jobs: Vec<Job>, vehicles: Vec<Vehicle>, matrix: Matrix) -> GenericResult<Self> {
        let amount_size = jobs
            .first()
            .map(|job| job.pickup.size())
            .or_else(|| vehicles.first().map(|vehicle| vehicle.capacity.size()))
            .unwrap_or(0);

        check_jobs(&jobs, &matrix, amount_size)?;
        check_vehicles(&vehicles, &matrix, amount_size)?;
        check_matrix(&matrix)?;

        let compatibility = vehicles
            .iter()
            .flat_map(|vehicle| jobs.iter().map(|job| job.skills.is_subset(&vehicle.skills)))
            .collect();

        Ok(Self { jobs, vehicles, matrix, amount_size, compatibility })
    }

    /// Returns the travel matrix.
    pub fn get_matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Returns the additive identity in the instance's load space.
    pub fn zero_amount(&self) -> Amount {
        Amount::zero(self.amount_size)
    }

    /// Returns the shared amount dimension.
    pub fn amount_size(&self) -> usize {
        self.amount_size
    }

    /// Checks whether the vehicle provides all skills required by the job.
    pub fn vehicle_ok_with_job(&self, vehicle_rank: usize, job_rank: usize) -> bool {
        self.compatibility[vehicle_rank * self.jobs.len() + job_rank]
    }
}

fn check_jobs(jobs: &[Job], matrix: &Matrix, amount_size: usize) -> GenericResult<()> {
    for job in jobs {
        if job.location >= matrix.size() {
            return Err(err(format!("job {}: location {} outside matrix", job.id, job.location)));
        }

        if job.pickup.size() != amount_size || job.delivery.size() != amount_size {
            return Err(err(format!("job {}: amount dimension mismatch", job.id)));
        }

        let zero = Amount::zero(amount_size);
        if !job.pickup.can_fit(&zero) || !job.delivery.can_fit(&zero) {
            return Err(err(format!("job {}: negative amount component", job.id)));
        }

        if job.tws.is_empty() {
            return Err(err(format!("job {}: no time windows", job.id)));
        }

        let ordered = job.tws.iter().all(|tw| tw.start <= tw.end)
            && job.tws.windows(2).all(|pair| pair[0].end < pair[1].start);
        if !ordered {
            return Err(err(format!("job {}: time windows not disjoint and ordered", job.id)));
        }
    }

    Ok(())
}

fn check_vehicles(vehicles: &[Vehicle], matrix: &Matrix, amount_size: usize) -> GenericResult<()> {
    for vehicle in vehicles {
        let location_ok =
            |location: Option<Location>| location.map_or(true, |loc| loc < matrix.size());
        if !location_ok(vehicle.start) || !location_ok(vehicle.end) {
            return Err(err(format!("vehicle {}: depot location outside matrix", vehicle.id)));
        }

        if vehicle.capacity.size() != amount_size {
            return Err(err(format!("vehicle {}: capacity dimension mismatch", vehicle.id)));
        }

        if vehicle.tw.start > vehicle.tw.end {
            return Err(err(format!("vehicle {}: inverted working time window", vehicle.id)));
        }
    }

    Ok(())
}

fn check_matrix(matrix: &Matrix) -> GenericResult<()> {
    if (0..matrix.size()).any(|loc| matrix[loc][loc] != 0) {
        return Err(err("matrix has a non-zero diagonal".to_string()));
    }

    Ok(())
}

fn err(msg: String) -> GenericError {
    GenericError::from(format!("cannot create input: {msg}"))
}
