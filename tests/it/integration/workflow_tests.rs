//! Editing workflow tests: schema, rows, charts, import/export.

use crate::helpers::{TestPlaygroundBuilder, assert_row_count, field_names, row, sales_playground};
use data_playground::app::Playground;
use data_playground::data::{DataError, ErrorKind, MoveDirection, NumericDomain, find_sample_schema, process_chart_data};
use data_playground::render::Surface;
use data_playground::types::{ChartConfigUpdate, ChartType, FieldType};

// ============================================================================
// Schema
// ============================================================================

#[test]
fn test_remove_field_clears_rows() {
    for index in 0..2 {
        let mut playground = sales_playground();
        playground.remove_field(index).unwrap();
        assert_row_count(&playground, 0);
        assert_eq!(playground.fields().len(), 1);
    }
}

#[test]
fn test_remove_field_with_stale_index() {
    let mut playground = sales_playground();
    let err = playground.remove_field(9).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Index);
    assert_row_count(&playground, 2);
}

#[test]
fn test_move_field_boundaries_are_no_ops() {
    let mut playground = TestPlaygroundBuilder::new()
        .with_field("A", FieldType::Text)
        .with_field("B", FieldType::Text)
        .with_field("C", FieldType::Text)
        .build();

    assert!(!playground.move_field(0, MoveDirection::Up));
    assert!(!playground.move_field(2, MoveDirection::Down));
    assert_eq!(field_names(&playground), vec!["A", "B", "C"]);

    assert!(playground.move_field(0, MoveDirection::Down));
    assert_eq!(field_names(&playground), vec!["B", "A", "C"]);
    assert!(playground.move_field(2, MoveDirection::Up));
    assert_eq!(field_names(&playground), vec!["B", "C", "A"]);
}

#[test]
fn test_add_field_validation() {
    let mut playground = sales_playground();
    assert!(matches!(
        playground.add_field("   ", FieldType::Text),
        Err(DataError::EmptyFieldName)
    ));
    assert!(matches!(
        playground.add_field(" Sales ", FieldType::Number),
        Err(DataError::DuplicateField(_))
    ));

    playground.add_field("  Region ", FieldType::Text).unwrap();
    assert_eq!(field_names(&playground), vec!["Product", "Sales", "Region"]);
    assert_row_count(&playground, 2);
}

#[test]
fn test_sample_schema_replaces_fields_and_clears_rows() {
    let mut playground = sales_playground();
    playground.load_sample_schema(find_sample_schema("Weather").unwrap());
    assert_eq!(playground.fields()[0].name, "Location");
    assert_row_count(&playground, 0);

    assert_eq!(playground.load_sample_data(), 10);
    assert_eq!(playground.rows()[0].get("Location"), "New York");
}

// ============================================================================
// Rows
// ============================================================================

#[test]
fn test_add_row_requires_text_fields() {
    let mut playground = TestPlaygroundBuilder::new()
        .with_field("Category", FieldType::Text)
        .with_field("Amount", FieldType::Number)
        .build();

    let err = playground
        .add_row(row(&[("Category", ""), ("Amount", "3")]))
        .unwrap_err();
    assert!(err.to_string().contains("Category"));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_row_count(&playground, 0);

    playground.add_row(row(&[("Category", "Food")])).unwrap();
    assert_row_count(&playground, 1);
}

#[test]
fn test_cell_and_row_edits() {
    let mut playground = sales_playground();
    playground.update_cell(1, "Sales", "7").unwrap();
    assert_eq!(playground.rows()[1].get("Sales"), "7");

    playground
        .update_row(0, row(&[("Product", "Z"), ("Sales", "1")]))
        .unwrap();
    assert_eq!(playground.rows()[0].get("Product"), "Z");

    let removed = playground.remove_row(0).unwrap();
    assert_eq!(removed.get("Product"), "Z");
    assert_row_count(&playground, 1);

    assert!(matches!(
        playground.remove_row(5),
        Err(DataError::RowIndex { index: 5, len: 1 })
    ));

    playground.clear_data();
    assert_row_count(&playground, 0);
}

// ============================================================================
// Charts
// ============================================================================

#[test]
fn test_bar_scenario_domain() {
    let playground = sales_playground();
    let config = playground.chart("c1").unwrap();
    let data = process_chart_data(playground.schema(), playground.rows(), config);
    assert_eq!(data.y_domain(), Some(NumericDomain { min: 0.0, max: 10.0 }));
    let values: Vec<f64> = data.points().iter().map(|p| p.value).collect();
    assert_eq!(values, vec![10.0, 5.0]);
}

#[test]
fn test_default_chart_needs_schema_and_rows() {
    let mut playground = Playground::new();
    assert!(matches!(playground.add_default_chart(), Err(DataError::NothingToChart)));

    playground.add_field("Name", FieldType::Text).unwrap();
    playground.add_field("Score", FieldType::Number).unwrap();
    assert!(playground.ensure_default_chart().is_none());

    playground.add_row(row(&[("Name", "x"), ("Score", "1")])).unwrap();
    let id = playground.ensure_default_chart().unwrap();
    assert!(id.starts_with("chart-"));
    assert!(playground.ensure_default_chart().is_none());

    let chart = playground.active_chart().unwrap();
    assert_eq!(chart.chart_type, ChartType::Bar);
    assert_eq!(chart.title, "Chart 1");
    assert_eq!(chart.x_axis, "Name");
    assert_eq!(chart.y_axis, "Score");
}

#[test]
fn test_removing_charts_updates_selection() {
    let mut playground = TestPlaygroundBuilder::new()
        .with_field("P", FieldType::Text)
        .with_chart("a", ChartType::Bar, "P", "")
        .with_chart("b", ChartType::Pie, "P", "")
        .with_chart("c", ChartType::Line, "P", "")
        .with_active(Some("b"))
        .build();

    playground.remove_chart("c");
    assert_eq!(playground.active_chart_id(), Some("b"));

    playground.remove_chart("b");
    assert_eq!(playground.active_chart_id(), Some("a"));

    playground.remove_chart("a");
    assert_eq!(playground.active_chart_id(), None);
    assert!(playground.render_active(&Surface::default()).is_none());
}

#[test]
fn test_update_unknown_chart_is_ignored() {
    let mut playground = sales_playground();
    assert!(!playground.update_chart("nope", &ChartConfigUpdate::default().title("x")));
    assert_eq!(playground.charts().len(), 1);
}

#[test]
fn test_stale_active_selection_renders_nothing() {
    let mut playground = sales_playground();
    playground.set_active_chart(Some("gone".to_string()));
    assert!(playground.active_chart().is_none());
    assert!(playground.render_active(&Surface::default()).is_none());
}

#[test]
fn test_rendering_one_chart_leaves_others_alone() {
    let mut playground = sales_playground();
    playground.add_chart(
        data_playground::types::ChartConfig::new("c2", ChartType::Pie).with_axes("Product", ""),
    );
    let before = playground.chart("c1").cloned();

    let first = playground.render_chart("c2", &Surface::default()).unwrap();
    let second = playground.render_chart("c2", &Surface::default()).unwrap();

    assert_eq!(first, second);
    assert_eq!(playground.chart("c1").cloned(), before);
}

#[test]
fn test_schema_change_leaves_dangling_chart_empty() {
    let mut playground = sales_playground();
    playground.remove_field(1).unwrap();
    playground
        .add_row(row(&[("Product", "A"), ("Sales", "4")]))
        .unwrap();

    // Sales is gone from the schema but still a row key, so it resolves
    let scene = playground.render_chart("c1", &Surface::default()).unwrap();
    assert!(scene.has_marks());

    playground.clear_data();
    let scene = playground.render_chart("c1", &Surface::default()).unwrap();
    assert!(!scene.has_marks());
}

// ============================================================================
// Import / export
// ============================================================================

#[test]
fn test_export_import_round_trip_through_store() {
    let source = sales_playground();
    let exported = source.export_json();

    let mut target = Playground::new();
    target.import_json(&exported).unwrap();
    assert_eq!(target.fields(), source.fields());
    assert_eq!(target.rows(), source.rows());
    assert!(target.charts().is_empty());
}

#[test]
fn test_failed_import_changes_nothing() {
    let mut playground = sales_playground();
    let before = playground.snapshot();
    assert!(playground.import_json(r#"{"schema": "x", "data": []}"#).is_err());
    assert_eq!(playground.snapshot(), before);
}

#[test]
fn test_import_keeps_charts() {
    let mut playground = sales_playground();
    playground
        .import_json(r#"{"schema": [{"name": "Other", "type": "text"}], "data": [{"Other": "q"}]}"#)
        .unwrap();
    assert_eq!(playground.charts().len(), 1);
    let scene = playground.render_chart("c1", &Surface::default()).unwrap();
    assert!(!scene.has_marks());
}
