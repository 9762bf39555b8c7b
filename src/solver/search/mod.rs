//! Local search operators consuming routes and solution state.

mod cross_exchange;
pub use self::cross_exchange::CrossExchange;
