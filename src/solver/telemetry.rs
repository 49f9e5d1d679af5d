//! Progress reporting for solvers.

use std::sync::Arc;

/// A logger type which is called with various information regarding the work
/// done by a solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Sends a lazily formatted message to `logger`, if one is attached.
pub(crate) fn log_info(logger: Option<&InfoLogger>, message: impl FnOnce() -> String) {
    if let Some(logger) = logger {
        logger(&message());
    }
}
