//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level task operations to Dart via FRB.
//! - Keep error semantics as simple envelopes for UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - All calls are synchronous and run on the invoking UI isolate
//!   thread; the backing task service is thread-local to that thread.
//! - Envelope messages are diagnostic text; row payloads carry metadata
//!   the UI renders directly.

use log::debug;
use std::cell::RefCell;
use taskdeck_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    snapshot_rows, Priority, TaskService,
};

thread_local! {
    // One service per UI isolate thread. FRB sync calls always arrive on
    // the isolate that made them, so state is stable across calls.
    static SERVICE: RefCell<TaskService> = RefCell::new(TaskService::new());
}

fn with_service<T>(f: impl FnOnce(&mut TaskService) -> T) -> T {
    SERVICE.with(|service| f(&mut service.borrow_mut()))
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path for rolling log files.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`; reconfiguration attempts
///   return an error message.
/// - Never panics; returns empty string on success and the error message
///   on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for task commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Affected row index, when one exists.
    pub index: Option<u32>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl DeckActionResponse {
    fn success(message: impl Into<String>, index: Option<u32>) -> Self {
        Self {
            ok: true,
            index,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            index: None,
            message: message.into(),
        }
    }
}

/// Flat task row for the UI list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckTaskItem {
    /// Stable task id in string form.
    pub uuid: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    /// Creation time in Unix epoch milliseconds.
    pub created_at_ms: i64,
    /// Numeric priority level (0=Low, 1=Medium, 2=High).
    pub priority_level: u8,
    /// Display label matching the level.
    pub priority_label: String,
}

/// Derived counters envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckStatsResponse {
    pub total: u32,
    pub completed: u32,
    pub pending: u32,
}

/// Index snapshot envelope for filter queries.
///
/// Indices are valid only until the next mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckIndexListResponse {
    pub ok: bool,
    pub indices: Vec<u32>,
    pub message: String,
}

/// Creates a task from title, description and raw priority level.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Empty post-trim titles and out-of-range levels fail cleanly with no
///   row created.
/// - Returns the created row index on success.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_create_task(
    title: String,
    description: String,
    priority_level: i64,
) -> DeckActionResponse {
    with_service(|service| {
        match service.create_task_with_level(title.trim(), description.as_str(), priority_level) {
            Ok(index) => DeckActionResponse::success("Task created.", Some(index as u32)),
            Err(err) => DeckActionResponse::failure(format!("deck_create_task failed: {err}")),
        }
    })
}

/// Deletes the task at `index`.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Invalid indices fail cleanly; later rows shift down by one on
///   success.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_delete_task(index: u32) -> DeckActionResponse {
    with_service(|service| {
        if service.delete_task(index as usize) {
            DeckActionResponse::success("Task deleted.", Some(index))
        } else {
            DeckActionResponse::failure(format!(
                "deck_delete_task failed: index out of range: {index}"
            ))
        }
    })
}

/// Toggles completion of the task at `index`.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Statistics are consistent by the time the call returns.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_toggle_task(index: u32) -> DeckActionResponse {
    with_service(|service| {
        if (index as usize) >= service.store().len() {
            return DeckActionResponse::failure(format!(
                "deck_toggle_task failed: index out of range: {index}"
            ));
        }
        service.toggle_task(index as usize);
        DeckActionResponse::success("Task toggled.", Some(index))
    })
}

/// Removes every completed task.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Reports how many rows were removed.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_clear_completed() -> DeckActionResponse {
    with_service(|service| {
        let before = service.store().len();
        service.clear_completed_tasks();
        let removed = before - service.store().len();
        DeckActionResponse::success(format!("Cleared {removed} completed task(s)."), None)
    })
}

/// Lists every task as a flat row snapshot, in display order.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Row order matches display order; indices are implicit positions.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_list_tasks() -> Vec<DeckTaskItem> {
    with_service(|service| {
        snapshot_rows(service.store())
            .into_iter()
            .map(|row| DeckTaskItem {
                uuid: row.uuid,
                title: row.title,
                description: row.description,
                completed: row.completed,
                created_at_ms: row.created_at_ms,
                priority_level: row.priority_level,
                priority_label: row.priority_label.to_owned(),
            })
            .collect()
    })
}

/// Returns current derived counters.
///
/// # FFI contract
/// - Sync call; never panics.
/// - `total == completed + pending` always holds.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_stats() -> DeckStatsResponse {
    with_service(|service| {
        let snapshot = service.stats().snapshot();
        DeckStatsResponse {
            total: snapshot.total as u32,
            completed: snapshot.completed as u32,
            pending: snapshot.pending as u32,
        }
    })
}

/// Returns indices of tasks matching a raw priority level.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Out-of-range levels are rejected (no silent empty result).
/// - Indices are a snapshot, invalidated by the next mutation.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_tasks_by_priority(priority_level: i64) -> DeckIndexListResponse {
    let Some(priority) = Priority::from_level(priority_level) else {
        return DeckIndexListResponse {
            ok: false,
            indices: Vec::new(),
            message: format!("deck_tasks_by_priority failed: priority level out of range: {priority_level}"),
        };
    };
    with_service(|service| {
        let indices = to_u32_indices(service.tasks_by_priority(priority));
        debug!(
            "event=query_by_priority module=ffi status=ok level={} matches={}",
            priority_level,
            indices.len()
        );
        DeckIndexListResponse {
            ok: true,
            message: format!("Found {} task(s).", indices.len()),
            indices,
        }
    })
}

/// Returns indices of completed tasks, ascending.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Indices are a snapshot, invalidated by the next mutation.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_completed_tasks() -> Vec<u32> {
    with_service(|service| to_u32_indices(service.completed_tasks()))
}

/// Returns indices of pending tasks, ascending.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Indices are a snapshot, invalidated by the next mutation.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_pending_tasks() -> Vec<u32> {
    with_service(|service| to_u32_indices(service.pending_tasks()))
}

/// Seeds the fixed demonstration rows.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Additive: existing tasks are never cleared.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_load_sample_data() -> DeckActionResponse {
    with_service(|service| {
        service.load_sample_data();
        DeckActionResponse::success(
            format!("Sample data loaded; {} task(s) total.", service.store().len()),
            None,
        )
    })
}

fn to_u32_indices(indices: Vec<usize>) -> Vec<u32> {
    indices.into_iter().map(|index| index as u32).collect()
}
