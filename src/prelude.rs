//! Re-exports of the most commonly used types.

pub use crate::models::common::{Amount, Cost, Duration, Gain, Location, TimeWindow};
pub use crate::models::problem::{Job, Skill, Skills, Vehicle};
pub use crate::models::{Input, Matrix};

pub use crate::construction::heuristics::{solve, solve_with_environment, Init, Strategy};
pub use crate::construction::routes::{RawRoute, Route, TwRoute};

pub use crate::solver::search::CrossExchange;
pub use crate::solver::SolutionState;

pub use crate::utils::{Environment, GenericError, GenericResult, InfoLogger};
