//! Derived task counters with per-counter change notification.
//!
//! # Responsibility
//! - Recompute total/completed/pending from current store contents.
//! - Notify subscribers of each counter that changed since last emission.
//!
//! # Invariants
//! - `total == completed + pending` after every refresh.
//! - Recomputation is a full rescan over the store; no incremental
//!   counters are kept that could drift.
//! - Unchanged counters emit nothing.

use crate::store::task_store::{ListenerId, TaskStore};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

/// One derived counter identity.
///
/// Subscribers pick the counter they need instead of receiving one
/// combined notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatCounter {
    /// Number of tasks in the store.
    Total,
    /// Number of tasks with the completion flag set.
    Completed,
    /// `Total - Completed`.
    Pending,
}

/// Point-in-time copy of all three counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

type CounterListener = Box<dyn FnMut(usize)>;

/// Derived statistics over one task store.
///
/// Interior mutability keeps `refresh` callable from inside store event
/// dispatch, where only a shared reference to the surrounding state is
/// available. Single-threaded by contract, like the store itself.
#[derive(Default)]
pub struct TaskStats {
    total: Cell<usize>,
    completed: Cell<usize>,
    pending: Cell<usize>,
    listeners: RefCell<BTreeMap<ListenerId, (StatCounter, Rc<RefCell<CounterListener>>)>>,
    next_listener_id: Cell<ListenerId>,
}

impl TaskStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.total.get()
    }

    pub fn completed(&self) -> usize {
        self.completed.get()
    }

    pub fn pending(&self) -> usize {
        self.pending.get()
    }

    /// Copies all three counters at once.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total: self.total.get(),
            completed: self.completed.get(),
            pending: self.pending.get(),
        }
    }

    /// Subscribes to one counter only.
    ///
    /// The listener receives the new value each time that counter's value
    /// changes across a refresh. Delivery follows subscription order.
    pub fn subscribe(&self, counter: StatCounter, listener: CounterListener) -> ListenerId {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        self.listeners
            .borrow_mut()
            .insert(id, (counter, Rc::new(RefCell::new(listener))));
        id
    }

    /// Removes one listener. Returns `false` when the id is unknown.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.borrow_mut().remove(&id).is_some()
    }

    /// Recomputes all counters from `store` with a full rescan.
    ///
    /// # Contract
    /// - Emits one notification per counter whose value changed since the
    ///   last emission; unchanged counters stay silent.
    /// - Returns the changed counters in `Total`, `Completed`, `Pending`
    ///   order (empty when nothing moved).
    pub fn refresh(&self, store: &TaskStore) -> Vec<StatCounter> {
        let total = store.len();
        let completed = store
            .tasks()
            .iter()
            .filter(|task| task.completed)
            .count();
        let pending = total - completed;

        let mut changed = Vec::new();
        if self.total.replace(total) != total {
            changed.push(StatCounter::Total);
        }
        if self.completed.replace(completed) != completed {
            changed.push(StatCounter::Completed);
        }
        if self.pending.replace(pending) != pending {
            changed.push(StatCounter::Pending);
        }

        for counter in &changed {
            self.notify(*counter);
        }
        changed
    }

    fn notify(&self, counter: StatCounter) {
        let value = match counter {
            StatCounter::Total => self.total.get(),
            StatCounter::Completed => self.completed.get(),
            StatCounter::Pending => self.pending.get(),
        };
        // Snapshot first: listeners may (un)subscribe during dispatch.
        let snapshot: Vec<Rc<RefCell<CounterListener>>> = self
            .listeners
            .borrow()
            .values()
            .filter(|(subscribed, _)| *subscribed == counter)
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            (listener.borrow_mut())(value);
        }
    }
}
