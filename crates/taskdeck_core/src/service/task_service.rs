//! Task facade service.
//!
//! # Responsibility
//! - Provide the single entry point the presentation layer calls.
//! - Wire derived statistics to store change events at construction.
//!
//! # Invariants
//! - Statistics reflect the store by the time any facade call returns.
//! - Query results are index snapshots, invalidated by later mutation.
//! - A rejected create leaves no partial state behind, including the
//!   raw-level path.

use crate::model::task::{Priority, Task};
use crate::stats::TaskStats;
use crate::store::task_store::{FieldWrite, StoreError, StoreEvent, TaskField, TaskStore};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Errors surfaced by facade operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskServiceError {
    /// Creation rejected: title was empty after trimming.
    Rejected,
    /// Raw priority level outside the Low/Medium/High scale.
    InvalidPriorityLevel(i64),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected => write!(f, "task creation rejected: title must not be blank"),
            Self::InvalidPriorityLevel(level) => {
                write!(f, "priority level out of range: {level}")
            }
        }
    }
}

impl Error for TaskServiceError {}

impl From<StoreError> for TaskServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Validation(_) => Self::Rejected,
        }
    }
}

/// Facade over the task store and derived statistics.
///
/// Owns the store. At construction it subscribes a refresh listener for
/// every event that can change the counters: insertion, removal, count
/// change, and completion-flag change.
pub struct TaskService {
    store: TaskStore,
    stats: Rc<TaskStats>,
}

impl Default for TaskService {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskService {
    pub fn new() -> Self {
        let store = TaskStore::new();
        let stats = Rc::new(TaskStats::new());
        let reactive = Rc::clone(&stats);
        store.subscribe(Box::new(move |store, event| {
            if affects_counters(event) {
                reactive.refresh(store);
            }
        }));
        Self { store, stats }
    }

    /// Read access to the underlying store (rows, subscriptions).
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Mutable access for callers needing raw store operations.
    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    /// Derived counters with per-counter subscriptions.
    pub fn stats(&self) -> &TaskStats {
        &self.stats
    }

    pub fn total_tasks(&self) -> usize {
        self.stats.total()
    }

    pub fn completed_count(&self) -> usize {
        self.stats.completed()
    }

    pub fn pending_count(&self) -> usize {
        self.stats.pending()
    }

    /// Creates one task.
    ///
    /// # Contract
    /// - Empty post-trim titles are rejected; nothing is created.
    /// - A non-default `priority` is applied with a follow-up field write
    ///   on the newly created row.
    /// - Returns the index of the new row.
    pub fn create_task(
        &mut self,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> Result<usize, TaskServiceError> {
        let index = self.store.create(title, description)?;
        if priority != Priority::default() {
            self.store.set_field(index, FieldWrite::Priority(priority));
        }
        Ok(index)
    }

    /// Creates one task from a raw numeric priority level.
    ///
    /// Out-of-range levels are rejected before anything is created, so a
    /// bad level never leaves a default-priority row behind.
    pub fn create_task_with_level(
        &mut self,
        title: &str,
        description: &str,
        level: i64,
    ) -> Result<usize, TaskServiceError> {
        let priority =
            Priority::from_level(level).ok_or(TaskServiceError::InvalidPriorityLevel(level))?;
        self.create_task(title, description, priority)
    }

    /// Removes the task at `index`. Returns `false` on invalid index.
    pub fn delete_task(&mut self, index: usize) -> bool {
        self.store.remove(index)
    }

    /// Flips completion at `index`, then refreshes statistics before
    /// returning.
    ///
    /// The store listener already refreshed during dispatch; the forced
    /// pass keeps the counters consistent even with no listener attached.
    pub fn toggle_task(&mut self, index: usize) {
        self.store.toggle_completed(index);
        self.stats.refresh(&self.store);
    }

    /// Removes every completed task.
    pub fn clear_completed_tasks(&mut self) {
        let before = self.store.len();
        self.store.clear_completed();
        info!(
            "event=clear_completed module=service status=ok removed={} remaining={}",
            before - self.store.len(),
            self.store.len()
        );
    }

    /// Returns indices of tasks with `priority`, ascending.
    ///
    /// The result is a snapshot: any later mutation invalidates it.
    pub fn tasks_by_priority(&self, priority: Priority) -> Vec<usize> {
        self.indices_where(|task| task.priority == priority)
    }

    /// Returns indices of completed tasks, ascending. Snapshot semantics.
    pub fn completed_tasks(&self) -> Vec<usize> {
        self.indices_where(|task| task.completed)
    }

    /// Returns indices of pending tasks, ascending. Snapshot semantics.
    pub fn pending_tasks(&self) -> Vec<usize> {
        self.indices_where(|task| !task.completed)
    }

    /// Appends the fixed demonstration rows. Never clears existing tasks.
    pub fn load_sample_data(&mut self) {
        const SAMPLE: [(&str, &str, Priority); 4] = [
            (
                "Sketch board layout",
                "Wireframe the main task board screen",
                Priority::Medium,
            ),
            (
                "Write unit tests",
                "Add comprehensive test coverage",
                Priority::High,
            ),
            ("Documentation", "Write project documentation", Priority::Low),
            ("Code review", "Review pull requests", Priority::Medium),
        ];
        for (title, description, priority) in SAMPLE {
            // Sample titles are static and non-blank; create cannot reject.
            let _ = self.create_task(title, description, priority);
        }
        info!(
            "event=sample_data module=service status=ok count={}",
            self.store.len()
        );
    }

    fn indices_where(&self, predicate: impl Fn(&Task) -> bool) -> Vec<usize> {
        self.store
            .tasks()
            .iter()
            .enumerate()
            .filter(|(_, task)| predicate(task))
            .map(|(index, _)| index)
            .collect()
    }
}

fn affects_counters(event: &StoreEvent) -> bool {
    match event {
        StoreEvent::Inserted { .. }
        | StoreEvent::Removed { .. }
        | StoreEvent::CountChanged { .. } => true,
        StoreEvent::FieldChanged { field, .. } => *field == TaskField::Completed,
    }
}
