//! Problem definition models.

mod fleet;
pub use self::fleet::Vehicle;

mod jobs;
pub use self::jobs::{Job, Skill, Skills};
