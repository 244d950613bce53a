//! Change notification tests.

use crate::helpers::{row, sales_playground};
use data_playground::app::{Playground, StoreEvent};
use data_playground::types::FieldType;
use parking_lot::Mutex;
use std::sync::Arc;

fn record(playground: &mut Playground) -> Arc<Mutex<Vec<StoreEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    playground.subscribe(move |event| sink.lock().push(event.clone()));
    events
}

#[test]
fn test_field_removal_emits_schema_then_data() {
    let mut playground = sales_playground();
    let events = record(&mut playground);

    playground.remove_field(0).unwrap();
    assert_eq!(
        *events.lock(),
        vec![StoreEvent::SchemaChanged, StoreEvent::DataChanged]
    );
}

#[test]
fn test_rejected_mutation_emits_nothing() {
    let mut playground = sales_playground();
    let events = record(&mut playground);

    assert!(playground.add_row(row(&[("Sales", "1")])).is_err());
    assert!(!playground.move_field(0, data_playground::data::MoveDirection::Up));
    assert!(playground.remove_chart("missing").is_none());
    assert!(events.lock().is_empty());
}

#[test]
fn test_chart_lifecycle_events() {
    let mut playground = sales_playground();
    let events = record(&mut playground);

    let id = playground.add_default_chart().unwrap();
    playground.remove_chart(&id);

    assert_eq!(
        *events.lock(),
        vec![
            StoreEvent::ChartAdded(id.clone()),
            StoreEvent::ActiveChartChanged(Some(id.clone())),
            StoreEvent::ChartRemoved(id),
            StoreEvent::ActiveChartChanged(Some("c1".to_string())),
        ]
    );
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let mut playground = Playground::new();
    let count = Arc::new(Mutex::new(0));
    let sink = count.clone();
    let id = playground.subscribe(move |_| *sink.lock() += 1);

    playground.add_field("A", FieldType::Text).unwrap();
    assert!(playground.unsubscribe(id));
    assert!(!playground.unsubscribe(id));
    playground.add_field("B", FieldType::Text).unwrap();

    assert_eq!(*count.lock(), 1);
    assert_eq!(playground.subscriber_count(), 0);
}

#[test]
fn test_data_revision_tracks_schema_and_rows_only() {
    let mut playground = sales_playground();
    let start = playground.data_revision();

    playground.set_active_chart(None);
    assert_eq!(playground.data_revision(), start);

    playground.add_row(row(&[("Product", "C"), ("Sales", "2")])).unwrap();
    assert_eq!(playground.data_revision(), start + 1);
}
