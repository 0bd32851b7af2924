//! Core use-case services.
//!
//! # Responsibility
//! - Compose store mutations and statistics into the API the
//!   presentation layer calls.
//! - Keep UI/FFI layers decoupled from store internals.

pub mod task_service;
