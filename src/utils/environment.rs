//! Contains environment specific logic.

use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences solver
/// behavior.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(|msg| println!("{msg}")))
    }
}
