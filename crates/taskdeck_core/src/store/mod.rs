//! Owning task collection and change-notification layer.
//!
//! # Responsibility
//! - Hold the ordered task sequence as the single source of truth.
//! - Emit explicit change events at well-defined mutation points.
//!
//! # Invariants
//! - Every admitted task satisfies `Task::validate()`.
//! - Events are delivered synchronously, after state is updated, within
//!   the same call stack as the mutation that caused them.

pub mod task_store;
