//! Core domain logic for taskdeck.
//! This crate is the single source of truth for task-list invariants.

pub mod binding;
pub mod logging;
pub mod model;
pub mod service;
pub mod stats;
pub mod store;

pub use binding::list_binding::{
    field_keys, row_snapshot, row_value, set_row_value, snapshot_rows, BindingValue, RowSnapshot,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Task, TaskId, TaskValidationError};
pub use service::task_service::{TaskService, TaskServiceError};
pub use stats::{StatCounter, StatsSnapshot, TaskStats};
pub use store::task_store::{
    FieldWrite, ListenerId, StoreError, StoreEvent, StoreResult, TaskField, TaskStore,
};

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
