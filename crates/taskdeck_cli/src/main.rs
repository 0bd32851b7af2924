//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskdeck_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskdeck_core::TaskService;

fn main() {
    // Tiny probe to validate core crate wiring independently from the
    // Flutter/FFI runtime setup.
    println!("taskdeck_core ping={}", taskdeck_core::ping());
    println!("taskdeck_core version={}", taskdeck_core::core_version());

    let mut service = TaskService::new();
    service.load_sample_data();
    let stats = service.stats().snapshot();
    println!(
        "taskdeck_core sample total={} completed={} pending={}",
        stats.total, stats.completed, stats.pending
    );
}
