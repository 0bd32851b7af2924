//! Role-keyed list binding over the task store.
//!
//! # Responsibility
//! - Translate field-keyed reads and writes into typed store operations.
//! - Project rows into flat, display-ready snapshots.
//!
//! # Invariants
//! - Reads and writes address rows by index; `None`/`false` on invalid
//!   index, never a panic.
//! - Writes to `createdAt` and shape-mismatched values are rejected.
//! - Out-of-range priority levels are rejected before reaching the store.

use crate::model::task::Priority;
use crate::store::task_store::{FieldWrite, TaskField, TaskStore};

/// Display-ready value for one field of one row.
///
/// The variant shapes mirror the field types: text fields carry `Text`,
/// the completion flag `Flag`, the creation timestamp `Timestamp`, and
/// priority its numeric `Level`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingValue {
    Text(String),
    Flag(bool),
    Timestamp(i64),
    Level(u8),
}

/// Flat row projection for snapshot-style consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSnapshot {
    /// Positional index at snapshot time; invalidated by later mutation.
    pub index: usize,
    /// Stable task id in string form.
    pub uuid: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at_ms: i64,
    pub priority_level: u8,
    pub priority_label: &'static str,
}

/// Stable enumeration of field keys, in binding display order.
pub fn field_keys() -> Vec<&'static str> {
    TaskField::ALL.iter().map(|field| field.key()).collect()
}

/// Reads one field of one row. `None` on invalid index.
pub fn row_value(store: &TaskStore, index: usize, field: TaskField) -> Option<BindingValue> {
    let task = store.get(index)?;
    let value = match field {
        TaskField::Title => BindingValue::Text(task.title.clone()),
        TaskField::Description => BindingValue::Text(task.description.clone()),
        TaskField::Completed => BindingValue::Flag(task.completed),
        TaskField::CreatedAt => BindingValue::Timestamp(task.created_at_ms),
        TaskField::Priority => BindingValue::Level(task.priority.level()),
    };
    Some(value)
}

/// Writes one field of one row through the store's bounded mutation path.
///
/// # Contract
/// - Returns `false` on invalid index, on the read-only `createdAt`
///   field, on a value whose shape does not match the field, and on
///   out-of-range priority levels.
/// - Accepted writes emit `FieldChanged` through the store when the
///   stored value changes.
pub fn set_row_value(
    store: &mut TaskStore,
    index: usize,
    field: TaskField,
    value: BindingValue,
) -> bool {
    let write = match (field, value) {
        (TaskField::Title, BindingValue::Text(text)) => FieldWrite::Title(text),
        (TaskField::Description, BindingValue::Text(text)) => FieldWrite::Description(text),
        (TaskField::Completed, BindingValue::Flag(flag)) => FieldWrite::Completed(flag),
        (TaskField::Priority, BindingValue::Level(level)) => {
            match Priority::from_level(i64::from(level)) {
                Some(priority) => FieldWrite::Priority(priority),
                None => return false,
            }
        }
        _ => return false,
    };
    store.set_field(index, write)
}

/// Projects one row into a flat snapshot. `None` on invalid index.
pub fn row_snapshot(store: &TaskStore, index: usize) -> Option<RowSnapshot> {
    let task = store.get(index)?;
    Some(RowSnapshot {
        index,
        uuid: task.uuid.to_string(),
        title: task.title.clone(),
        description: task.description.clone(),
        completed: task.completed,
        created_at_ms: task.created_at_ms,
        priority_level: task.priority.level(),
        priority_label: task.priority.label(),
    })
}

/// Projects every row, in display order.
pub fn snapshot_rows(store: &TaskStore) -> Vec<RowSnapshot> {
    (0..store.len())
        .filter_map(|index| row_snapshot(store, index))
        .collect()
}
