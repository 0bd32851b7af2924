use std::cell::RefCell;
use std::rc::Rc;
use taskdeck_core::{
    field_keys, row_snapshot, row_value, set_row_value, snapshot_rows, BindingValue, Priority,
    StoreEvent, TaskField, TaskStore,
};

fn sample_store() -> TaskStore {
    let mut store = TaskStore::new();
    store.create("Alpha", "first detail").unwrap();
    store.create("Beta", "").unwrap();
    store.toggle_completed(1);
    store
}

#[test]
fn field_key_table_is_stable() {
    assert_eq!(
        field_keys(),
        vec!["title", "description", "completed", "createdAt", "priority"]
    );
}

#[test]
fn row_value_reads_every_field() {
    let store = sample_store();
    let created_at = store.get(0).unwrap().created_at_ms;

    assert_eq!(
        row_value(&store, 0, TaskField::Title),
        Some(BindingValue::Text("Alpha".to_string()))
    );
    assert_eq!(
        row_value(&store, 0, TaskField::Description),
        Some(BindingValue::Text("first detail".to_string()))
    );
    assert_eq!(
        row_value(&store, 0, TaskField::Completed),
        Some(BindingValue::Flag(false))
    );
    assert_eq!(
        row_value(&store, 0, TaskField::CreatedAt),
        Some(BindingValue::Timestamp(created_at))
    );
    assert_eq!(
        row_value(&store, 0, TaskField::Priority),
        Some(BindingValue::Level(1))
    );
}

#[test]
fn row_value_invalid_index_returns_none() {
    let store = sample_store();
    assert_eq!(row_value(&store, 2, TaskField::Title), None);
}

#[test]
fn set_row_value_writes_through_store_and_emits() {
    let mut store = sample_store();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    store.subscribe(Box::new(move |_, event| sink.borrow_mut().push(*event)));

    assert!(set_row_value(
        &mut store,
        0,
        TaskField::Title,
        BindingValue::Text("Renamed".to_string()),
    ));

    assert_eq!(store.get(0).unwrap().title, "Renamed");
    assert_eq!(
        events.borrow().as_slice(),
        &[StoreEvent::FieldChanged {
            index: 0,
            field: TaskField::Title,
        }]
    );
}

#[test]
fn set_row_value_rejects_created_at_write() {
    let mut store = sample_store();
    let created_at = store.get(0).unwrap().created_at_ms;

    assert!(!set_row_value(
        &mut store,
        0,
        TaskField::CreatedAt,
        BindingValue::Timestamp(0),
    ));
    assert_eq!(store.get(0).unwrap().created_at_ms, created_at);
}

#[test]
fn set_row_value_rejects_shape_mismatch() {
    let mut store = sample_store();

    assert!(!set_row_value(
        &mut store,
        0,
        TaskField::Completed,
        BindingValue::Text("yes".to_string()),
    ));
    assert!(!set_row_value(
        &mut store,
        0,
        TaskField::Priority,
        BindingValue::Flag(true),
    ));
    assert!(!store.get(0).unwrap().completed);
    assert_eq!(store.get(0).unwrap().priority, Priority::Medium);
}

#[test]
fn set_row_value_rejects_out_of_range_priority_level() {
    let mut store = sample_store();

    assert!(!set_row_value(
        &mut store,
        0,
        TaskField::Priority,
        BindingValue::Level(3),
    ));
    assert_eq!(store.get(0).unwrap().priority, Priority::Medium);
}

#[test]
fn set_row_value_accepts_priority_level() {
    let mut store = sample_store();

    assert!(set_row_value(
        &mut store,
        0,
        TaskField::Priority,
        BindingValue::Level(2),
    ));
    assert_eq!(store.get(0).unwrap().priority, Priority::High);
}

#[test]
fn set_row_value_invalid_index_returns_false() {
    let mut store = sample_store();
    assert!(!set_row_value(
        &mut store,
        9,
        TaskField::Title,
        BindingValue::Text("ghost".to_string()),
    ));
}

#[test]
fn row_snapshot_projects_display_fields() {
    let store = sample_store();
    let row = row_snapshot(&store, 1).unwrap();

    assert_eq!(row.index, 1);
    assert_eq!(row.uuid, store.get(1).unwrap().uuid.to_string());
    assert_eq!(row.title, "Beta");
    assert!(row.completed);
    assert_eq!(row.priority_level, 1);
    assert_eq!(row.priority_label, "Medium");
}

#[test]
fn snapshot_rows_cover_display_order() {
    let store = sample_store();
    let rows = snapshot_rows(&store);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].title, "Alpha");
    assert_eq!(rows[1].title, "Beta");
    assert_eq!(row_snapshot(&store, 2), None);
}
