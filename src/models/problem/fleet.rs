use crate::models::common::{Amount, Location, TimeWindow};
use crate::models::problem::Skills;

/// Represents a vehicle with an optional start and end depot, a capacity and
/// a working time window.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// A vehicle id.
    pub id: u64,

    /// An optional start location. When absent the route begins at its first
    /// job without any approach cost.
    pub start: Option<Location>,

    /// An optional end location. When absent the route ends at its last job
    /// without any return cost.
    pub end: Option<Location>,

    /// Maximum load the vehicle can carry at any time.
    pub capacity: Amount,

    /// Working time window which has to enclose the whole route.
    pub tw: TimeWindow,

    /// Skills provided by the vehicle.
    pub skills: Skills,
}

impl Vehicle {
    /// Creates a new instance of `Vehicle` without skills.
    pub fn new(
        id: u64,
        start: Option<Location>,
        end: Option<Location>,
        capacity: Amount,
        tw: TimeWindow,
    ) -> Self {
        Self { id, start, end, capacity, tw, skills: Skills::default() }
    }
}
