//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record owned by the store.
//! - Provide the priority scale with its level/label mappings.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another task.
//! - `title` is non-empty after trimming on every admitted record.
//! - `created_at_ms` is fixed at construction; no write path exists.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every task record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Operational addressing stays positional (index into the owning store);
/// the id exists for logging and external snapshots.
pub type TaskId = Uuid;

/// Closed priority scale for tasks.
///
/// Ordering is explicit (`Low < Medium < High`) and the numeric levels
/// 0/1/2 are part of the binding contract, so both must stay stable.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait behind everything else.
    Low,
    /// Normal backlog priority. Default for new tasks.
    #[default]
    Medium,
    /// Should be picked up next.
    High,
}

impl Priority {
    /// Stable numeric level consumed by binding and FFI layers.
    pub fn level(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    /// Parses a raw numeric level.
    ///
    /// Any value outside the closed scale is rejected here, which makes
    /// this the single gate every raw-level entry point goes through.
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(Self::Low),
            1 => Some(Self::Medium),
            2 => Some(Self::High),
            _ => None,
        }
    }

    /// Display label for list rows and summaries.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Validation failures for task admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty after trimming.
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be blank after trimming"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// Records are exclusively owned by a [`crate::store::task_store::TaskStore`];
/// consumers address them by index and must re-resolve after any removal,
/// since positional indices shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for logging and external snapshots.
    pub uuid: TaskId,
    /// Short display title, stored trimmed.
    pub title: String,
    /// Free-form detail text, may be empty.
    pub description: String,
    /// Completion flag. New tasks start pending.
    pub completed: bool,
    /// Priority level. New tasks start `Medium`.
    pub priority: Priority,
    /// Unix epoch milliseconds captured at construction.
    /// Serialized as `createdAt` to match the binding field-key table.
    #[serde(rename = "createdAt")]
    pub created_at_ms: i64,
}

impl Task {
    /// Creates a new task stamped with the current wall-clock time.
    ///
    /// # Contract
    /// - `title` is trimmed; empty post-trim titles are rejected.
    /// - New tasks start `completed=false`, `priority=Medium`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        Self::with_created_at(title, description, current_epoch_ms())
    }

    /// Creates a task with a caller-provided creation timestamp.
    ///
    /// Used by import/test paths where the timestamp already exists.
    /// Applies the same title validation as [`Task::new`].
    pub fn with_created_at(
        title: impl Into<String>,
        description: impl Into<String>,
        created_at_ms: i64,
    ) -> Result<Self, TaskValidationError> {
        let title = normalize_title(title)?;
        Ok(Self {
            uuid: Uuid::new_v4(),
            title,
            description: description.into(),
            completed: false,
            priority: Priority::default(),
            created_at_ms,
        })
    }

    /// Re-checks the admission invariant on an existing record.
    ///
    /// Constructors and store write paths already normalize through
    /// [`normalize_title`]; this exists for import paths that receive
    /// records built elsewhere.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Trims a raw title and rejects it when nothing remains.
///
/// The single admission gate for titles: constructors and every store
/// write path go through here.
pub(crate) fn normalize_title(
    raw: impl Into<String>,
) -> Result<String, TaskValidationError> {
    let title = raw.into().trim().to_string();
    if title.is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(title)
}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// A clock set before the epoch collapses to 0 rather than failing: the
/// timestamp is display metadata, not an ordering key.
pub(crate) fn current_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
