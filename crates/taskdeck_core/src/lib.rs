//! Core domain logic for Taskdeck.
//! This crate is the single source of truth for task-list invariants.

pub mod display;
pub mod logging;
pub mod model;
pub mod store;
pub mod theme;

pub use display::{format_relative, truncate};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{now_epoch_ms, Task, TaskId, MAX_DESCRIPTION_CHARS, MAX_TITLE_CHARS};
pub use store::task_store::{TaskCounts, TaskStore};
pub use theme::{resolve as resolve_theme, Theme, DARK, LIGHT};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
