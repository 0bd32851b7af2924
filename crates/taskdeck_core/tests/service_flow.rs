use taskdeck_core::{Priority, StatsSnapshot, TaskService, TaskServiceError};

#[test]
fn create_toggle_clear_scenario() {
    let mut service = TaskService::new();

    service.create_task("Buy milk", "", Priority::Medium).unwrap();
    let rejected = service.create_task("  ", "", Priority::Medium);
    assert_eq!(rejected, Err(TaskServiceError::Rejected));
    service
        .create_task("Write report", "", Priority::Medium)
        .unwrap();

    assert_eq!(service.total_tasks(), 2);

    service.toggle_task(0);
    assert_eq!(
        service.stats().snapshot(),
        StatsSnapshot {
            total: 2,
            completed: 1,
            pending: 1,
        }
    );

    service.clear_completed_tasks();
    assert_eq!(service.total_tasks(), 1);
    assert_eq!(service.store().get(0).unwrap().title, "Write report");
}

#[test]
fn priority_filter_returns_ascending_indices() {
    let mut service = TaskService::new();
    service.create_task("Backlog", "", Priority::Low).unwrap();
    service.create_task("Urgent A", "", Priority::High).unwrap();
    service.create_task("Urgent B", "", Priority::High).unwrap();

    assert_eq!(service.tasks_by_priority(Priority::High), vec![1, 2]);
    assert_eq!(service.tasks_by_priority(Priority::Low), vec![0]);
    assert!(service.tasks_by_priority(Priority::Medium).is_empty());
}

#[test]
fn create_task_applies_non_default_priority() {
    let mut service = TaskService::new();
    let index = service.create_task("Hotfix", "", Priority::High).unwrap();

    assert_eq!(service.store().get(index).unwrap().priority, Priority::High);
}

#[test]
fn create_task_with_level_rejects_out_of_range_before_creating() {
    let mut service = TaskService::new();

    let too_high = service.create_task_with_level("Task", "", 3);
    assert_eq!(too_high, Err(TaskServiceError::InvalidPriorityLevel(3)));

    let negative = service.create_task_with_level("Task", "", -1);
    assert_eq!(negative, Err(TaskServiceError::InvalidPriorityLevel(-1)));

    // A bad level must not leave a default-priority row behind.
    assert_eq!(service.total_tasks(), 0);
    assert!(service.store().is_empty());

    let index = service.create_task_with_level("Task", "", 2).unwrap();
    assert_eq!(service.store().get(index).unwrap().priority, Priority::High);
}

#[test]
fn stats_react_to_direct_store_mutations() {
    let mut service = TaskService::new();
    service.create_task("One", "", Priority::Medium).unwrap();
    service.create_task("Two", "", Priority::Medium).unwrap();

    // Bypass the facade: the subscription wired at construction still
    // refreshes the counters.
    service.store_mut().toggle_completed(1);

    assert_eq!(service.completed_count(), 1);
    assert_eq!(service.pending_count(), 1);
    assert_eq!(service.total_tasks(), 2);
}

#[test]
fn toggle_twice_leaves_counters_unchanged() {
    let mut service = TaskService::new();
    service.create_task("Flip", "", Priority::Medium).unwrap();
    let before = service.stats().snapshot();

    service.toggle_task(0);
    service.toggle_task(0);

    assert_eq!(service.stats().snapshot(), before);
}

#[test]
fn completed_and_pending_queries_partition_indices() {
    let mut service = TaskService::new();
    service.create_task("A", "", Priority::Medium).unwrap();
    service.create_task("B", "", Priority::Medium).unwrap();
    service.create_task("C", "", Priority::Medium).unwrap();
    service.toggle_task(1);

    assert_eq!(service.completed_tasks(), vec![1]);
    assert_eq!(service.pending_tasks(), vec![0, 2]);
}

#[test]
fn delete_task_invalid_index_returns_false() {
    let mut service = TaskService::new();
    assert!(!service.delete_task(0));

    service.create_task("Only", "", Priority::Medium).unwrap();
    assert!(!service.delete_task(1));
    assert!(service.delete_task(0));
    assert_eq!(service.total_tasks(), 0);
}

#[test]
fn sample_data_is_additive() {
    let mut service = TaskService::new();
    service
        .create_task("Existing", "kept as-is", Priority::Low)
        .unwrap();

    service.load_sample_data();

    assert_eq!(service.total_tasks(), 5);
    assert_eq!(service.store().get(0).unwrap().title, "Existing");
    assert_eq!(service.store().get(1).unwrap().title, "Sketch board layout");
    assert_eq!(service.store().get(2).unwrap().priority, Priority::High);
    assert_eq!(service.store().get(3).unwrap().priority, Priority::Low);
    assert!(service.store().tasks().iter().all(|task| !task.completed));
}

#[test]
fn sample_data_loads_repeatedly_without_clearing() {
    let mut service = TaskService::new();
    service.load_sample_data();
    service.load_sample_data();

    assert_eq!(service.total_tasks(), 8);
    assert_eq!(service.pending_count(), 8);
}
