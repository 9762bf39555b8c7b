use crate::models::common::{Amount, Duration, Location, TimeWindow};
use hashbrown::HashSet;

/// A skill required by a job or provided by a vehicle.
pub type Skill = u32;

/// A set of skills.
pub type Skills = HashSet<Skill>;

/// Represents a job: a single visit which picks up and/or delivers some
/// amount at a location within one of its time windows.
#[derive(Clone, Debug)]
pub struct Job {
    /// A job id.
    pub id: u64,

    /// Location of the job.
    pub location: Location,

    /// Amount picked up at the job, non-negative in every component.
    pub pickup: Amount,

    /// Amount delivered to the job, non-negative in every component.
    pub delivery: Amount,

    /// Service duration spent at the job location.
    pub service: Duration,

    /// Non-empty list of disjoint time windows ordered by start. Service may
    /// begin within any of them.
    pub tws: Vec<TimeWindow>,

    /// Skills required to serve the job.
    pub skills: Skills,
}

impl Job {
    /// Creates a new instance of `Job` without skill requirements.
    pub fn new(
        id: u64,
        location: Location,
        pickup: Amount,
        delivery: Amount,
        service: Duration,
        tws: Vec<TimeWindow>,
    ) -> Self {
        Self { id, location, pickup, delivery, service, tws, skills: Skills::default() }
    }
}
