use std::cell::RefCell;
use std::rc::Rc;
use taskdeck_core::{StatCounter, TaskStats, TaskStore};

fn record_counter(stats: &TaskStats, counter: StatCounter) -> Rc<RefCell<Vec<usize>>> {
    let values = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&values);
    stats.subscribe(counter, Box::new(move |value| sink.borrow_mut().push(value)));
    values
}

#[test]
fn refresh_recomputes_all_three_counters() {
    let mut store = TaskStore::new();
    store.create("Alpha", "").unwrap();
    store.create("Beta", "").unwrap();
    store.create("Gamma", "").unwrap();
    store.toggle_completed(1);

    let stats = TaskStats::new();
    stats.refresh(&store);

    assert_eq!(stats.total(), 3);
    assert_eq!(stats.completed(), 1);
    assert_eq!(stats.pending(), 2);
}

#[test]
fn total_equals_completed_plus_pending_after_every_operation() {
    let mut store = TaskStore::new();
    let stats = TaskStats::new();

    store.create("One", "").unwrap();
    stats.refresh(&store);
    assert_eq!(stats.total(), stats.completed() + stats.pending());

    store.create("Two", "").unwrap();
    store.toggle_completed(0);
    stats.refresh(&store);
    assert_eq!(stats.total(), stats.completed() + stats.pending());

    store.remove(0);
    stats.refresh(&store);
    assert_eq!(stats.total(), stats.completed() + stats.pending());

    store.clear_completed();
    stats.refresh(&store);
    assert_eq!(stats.total(), stats.completed() + stats.pending());
}

#[test]
fn refresh_reports_only_changed_counters() {
    let mut store = TaskStore::new();
    let stats = TaskStats::new();

    // Empty store against fresh counters: nothing moved.
    assert!(stats.refresh(&store).is_empty());

    store.create("First", "").unwrap();
    assert_eq!(
        stats.refresh(&store),
        vec![StatCounter::Total, StatCounter::Pending]
    );

    store.toggle_completed(0);
    assert_eq!(
        stats.refresh(&store),
        vec![StatCounter::Completed, StatCounter::Pending]
    );

    // No mutation since the last refresh.
    assert!(stats.refresh(&store).is_empty());
}

#[test]
fn subscribers_receive_only_their_counter() {
    let mut store = TaskStore::new();
    store.create("First", "").unwrap();
    let stats = TaskStats::new();
    stats.refresh(&store);

    let totals = record_counter(&stats, StatCounter::Total);
    let completed = record_counter(&stats, StatCounter::Completed);
    let pending = record_counter(&stats, StatCounter::Pending);

    store.toggle_completed(0);
    stats.refresh(&store);

    assert!(totals.borrow().is_empty());
    assert_eq!(completed.borrow().as_slice(), &[1]);
    assert_eq!(pending.borrow().as_slice(), &[0]);
}

#[test]
fn unchanged_counter_emits_nothing_across_refreshes() {
    let mut store = TaskStore::new();
    let stats = TaskStats::new();
    let totals = record_counter(&stats, StatCounter::Total);

    store.create("First", "").unwrap();
    stats.refresh(&store);
    store.toggle_completed(0);
    stats.refresh(&store);
    store.toggle_completed(0);
    stats.refresh(&store);

    // Total moved once (0 -> 1); the two toggles never touched it.
    assert_eq!(totals.borrow().as_slice(), &[1]);
}

#[test]
fn unsubscribe_stops_counter_delivery() {
    let mut store = TaskStore::new();
    let stats = TaskStats::new();

    let values = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&values);
    let id = stats.subscribe(
        StatCounter::Total,
        Box::new(move |value| sink.borrow_mut().push(value)),
    );

    store.create("First", "").unwrap();
    stats.refresh(&store);
    assert_eq!(values.borrow().as_slice(), &[1]);

    assert!(stats.unsubscribe(id));
    assert!(!stats.unsubscribe(id));

    store.create("Second", "").unwrap();
    stats.refresh(&store);
    assert_eq!(values.borrow().as_slice(), &[1]);
}

#[test]
fn snapshot_copies_all_counters_at_once() {
    let mut store = TaskStore::new();
    store.create("Alpha", "").unwrap();
    store.create("Beta", "").unwrap();
    store.toggle_completed(0);

    let stats = TaskStats::new();
    stats.refresh(&store);
    let snapshot = stats.snapshot();

    assert_eq!(snapshot.total, 2);
    assert_eq!(snapshot.completed, 1);
    assert_eq!(snapshot.pending, 1);
}
