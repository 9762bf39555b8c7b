//! Common models shared by problem and solution types.

mod amount;
pub use self::amount::Amount;

mod domain;
pub use self::domain::TimeWindow;

mod primitives;
pub use self::primitives::*;
