//! Task store: owning collection, bounded mutations, change events.
//!
//! # Responsibility
//! - Own the ordered `Task` sequence (insertion order = display order).
//! - Apply index-addressed mutations with admission validation.
//! - Notify subscribed listeners synchronously after each mutation.
//!
//! # Invariants
//! - A task with an empty post-trim title is never admitted, on any path.
//! - `created_at_ms` has no write path after admission.
//! - Listeners observe post-mutation state; delivery follows subscription
//!   order.
//! - A removal at index `i` shifts every later task down by one.

use crate::model::task::{normalize_title, Priority, Task, TaskValidationError};
use log::debug;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub type StoreResult<T> = Result<T, StoreError>;

/// Admission errors for store mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Input failed task validation; nothing was applied.
    Validation(TaskValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Field identifiers exposed to binding layers as stable lookup keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TaskField {
    Title,
    Description,
    Completed,
    CreatedAt,
    Priority,
}

impl TaskField {
    /// Stable enumeration of every field, in binding display order.
    pub const ALL: [TaskField; 5] = [
        Self::Title,
        Self::Description,
        Self::Completed,
        Self::CreatedAt,
        Self::Priority,
    ];

    /// Stable string key used by binding layers for lookups.
    pub fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Completed => "completed",
            Self::CreatedAt => "createdAt",
            Self::Priority => "priority",
        }
    }

    /// Resolves a binding key back to its field identifier.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Change event emitted by the store after a mutation.
///
/// The four variants are the full change-notification contract consumed
/// by bound views: each carries enough to re-render only affected rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// Row inserted at `index`.
    Inserted { index: usize },
    /// Row removed at `index`; later rows shifted down by one.
    Removed { index: usize },
    /// Named field changed in the row at `index`.
    FieldChanged { index: usize, field: TaskField },
    /// Total row count changed to `count`.
    CountChanged { count: usize },
}

/// Typed write for one mutable task field.
///
/// `created_at` is deliberately absent: the creation timestamp is
/// immutable after admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldWrite {
    Title(String),
    Description(String),
    Completed(bool),
    Priority(Priority),
}

impl FieldWrite {
    /// Field identifier this write addresses.
    pub fn field(&self) -> TaskField {
        match self {
            Self::Title(_) => TaskField::Title,
            Self::Description(_) => TaskField::Description,
            Self::Completed(_) => TaskField::Completed,
            Self::Priority(_) => TaskField::Priority,
        }
    }
}

/// Handle for one registered store listener.
pub type ListenerId = u64;

type StoreListener = Box<dyn FnMut(&TaskStore, &StoreEvent)>;

/// Owning task collection with synchronous change notification.
///
/// Single-threaded by contract: every operation runs to completion on the
/// calling thread, and events are delivered within the same call stack as
/// the mutation that caused them. Listeners receive the store by shared
/// reference, so re-entrant mutation is impossible by construction.
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    listeners: RefCell<BTreeMap<ListenerId, Rc<RefCell<StoreListener>>>>,
    next_listener_id: Cell<ListenerId>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener invoked after every mutation event.
    ///
    /// # Contract
    /// - Delivery is synchronous and follows subscription order.
    /// - The listener observes post-mutation store state.
    /// - Subscribing or unsubscribing inside a listener takes effect from
    ///   the next event, not the one being dispatched.
    pub fn subscribe(&self, listener: StoreListener) -> ListenerId {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        self.listeners
            .borrow_mut()
            .insert(id, Rc::new(RefCell::new(listener)));
        id
    }

    /// Removes one listener. Returns `false` when the id is unknown.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.borrow_mut().remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the task at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Read-only view over every task, in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a new task built from `title` and `description`.
    ///
    /// # Contract
    /// - `title` is trimmed; empty post-trim titles are rejected without
    ///   mutating the store.
    /// - New tasks start `completed=false`, `priority=Medium`,
    ///   `created_at_ms=now`.
    /// - Emits `Inserted` followed by `CountChanged`.
    /// - Returns the index of the new row.
    pub fn create(&mut self, title: &str, description: &str) -> StoreResult<usize> {
        let task = Task::new(title, description)?;
        let index = self.tasks.len();
        debug!(
            "event=task_create module=store status=ok index={} uuid={}",
            index, task.uuid
        );
        self.tasks.push(task);
        self.notify(&StoreEvent::Inserted { index });
        self.notify(&StoreEvent::CountChanged {
            count: self.tasks.len(),
        });
        Ok(index)
    }

    /// Removes the task at `index`. Returns `false` on invalid index.
    ///
    /// Indices of all later tasks shift down by one. Emits `Removed`
    /// followed by `CountChanged`.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.tasks.len() {
            return false;
        }
        let task = self.tasks.remove(index);
        debug!(
            "event=task_remove module=store status=ok index={} uuid={}",
            index, task.uuid
        );
        self.notify(&StoreEvent::Removed { index });
        self.notify(&StoreEvent::CountChanged {
            count: self.tasks.len(),
        });
        true
    }

    /// Flips the completion flag at `index`. No-op on invalid index.
    ///
    /// Emits `FieldChanged` for the `completed` field.
    pub fn toggle_completed(&mut self, index: usize) {
        let Some(task) = self.tasks.get_mut(index) else {
            return;
        };
        task.completed = !task.completed;
        self.notify(&StoreEvent::FieldChanged {
            index,
            field: TaskField::Completed,
        });
    }

    /// Removes every completed task.
    ///
    /// Scans from the end toward the start so pending rows keep their
    /// relative order and index shifting stays consistent. Emits one
    /// `Removed` + `CountChanged` pair per deleted row.
    pub fn clear_completed(&mut self) {
        for index in (0..self.tasks.len()).rev() {
            if self.tasks[index].completed {
                self.remove(index);
            }
        }
    }

    /// Applies one bounded field write at `index`.
    ///
    /// # Contract
    /// - Returns `false` on invalid index, and on title writes that are
    ///   empty after trimming (the admission invariant holds on every
    ///   write path, not only `create`).
    /// - Returns `true` when the write was accepted, including writes
    ///   that leave the stored value unchanged.
    /// - Emits `FieldChanged` only when the stored value actually changed.
    pub fn set_field(&mut self, index: usize, write: FieldWrite) -> bool {
        let Some(task) = self.tasks.get_mut(index) else {
            return false;
        };
        let field = write.field();
        let changed = match write {
            FieldWrite::Title(value) => match normalize_title(value) {
                Ok(title) => apply(&mut task.title, title),
                Err(_) => return false,
            },
            FieldWrite::Description(value) => apply(&mut task.description, value),
            FieldWrite::Completed(value) => apply(&mut task.completed, value),
            FieldWrite::Priority(value) => apply(&mut task.priority, value),
        };
        if changed {
            self.notify(&StoreEvent::FieldChanged { index, field });
        }
        true
    }

    fn notify(&self, event: &StoreEvent) {
        // Snapshot the registry first so listeners can (un)subscribe
        // during dispatch without hitting an active borrow.
        let snapshot: Vec<Rc<RefCell<StoreListener>>> =
            self.listeners.borrow().values().cloned().collect();
        for listener in snapshot {
            (listener.borrow_mut())(self, event);
        }
    }
}

fn apply<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
