//! View-binding adapters for declarative list UIs.
//!
//! # Responsibility
//! - Expose role-keyed read/write access over store rows.
//! - Provide flat row projections for snapshot-style consumers.
//!
//! # Invariants
//! - Field keys are stable lookup identifiers; `createdAt` is read-only.
//! - Change notification flows through `TaskStore::subscribe`; this layer
//!   adds no second event channel.

pub mod list_binding;
