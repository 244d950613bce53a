//! Chart engine tests: field resolution, coercion, ordering, domains.

use crate::helpers::row;
use data_playground::data::{
    ChartBody, FieldRef, NumericDomain, Schema, XDomain, coerce_number, process_chart_data,
    resolve_field,
};
use data_playground::types::{ChartConfig, ChartType, ColorScheme, DataRow, SchemaField};

fn schema() -> Schema {
    Schema::from_fields(vec![SchemaField::text("Label"), SchemaField::number("Value")])
}

fn rows(pairs: &[(&str, &str)]) -> Vec<DataRow> {
    pairs
        .iter()
        .map(|(label, value)| row(&[("Label", label), ("Value", value)]))
        .collect()
}

fn config(chart_type: ChartType) -> ChartConfig {
    ChartConfig::new("c", chart_type).with_axes("Label", "Value")
}

// ============================================================================
// Coercion
// ============================================================================

#[test]
fn test_non_numeric_text_counts_as_zero() {
    assert_eq!(coerce_number("abc"), 0.0);
    assert_eq!(coerce_number(""), 0.0);
    assert_eq!(coerce_number(" 4.5 "), 4.5);
    assert_eq!(coerce_number("inf"), 0.0);
}

#[test]
fn test_gauge_mean_includes_non_numeric_as_zero() {
    let data = process_chart_data(
        &schema(),
        &rows(&[("A", "10"), ("B", "abc")]),
        &config(ChartType::Gauge),
    );
    let gauge = data.gauge().unwrap();
    assert_eq!(gauge.mean, 5.0);
    assert_eq!(gauge.max, 10.0);
}

#[test]
fn test_bar_domain_counts_non_numeric_rows() {
    let data = process_chart_data(
        &schema(),
        &rows(&[("A", "abc"), ("B", "4")]),
        &config(ChartType::Bar),
    );
    assert_eq!(data.points().len(), 2);
    assert_eq!(data.points()[0].value, 0.0);
    assert_eq!(data.y_domain(), Some(NumericDomain { min: 0.0, max: 4.0 }));
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_line_sorts_labels_as_text() {
    for chart_type in [ChartType::Line, ChartType::Area] {
        let data = process_chart_data(
            &schema(),
            &rows(&[("10", "1"), ("2", "2"), ("1", "3")]),
            &config(chart_type),
        );
        let labels: Vec<&str> = data.points().iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "10", "2"]);
    }
}

#[test]
fn test_bar_keeps_row_order() {
    let data = process_chart_data(
        &schema(),
        &rows(&[("10", "1"), ("2", "2"), ("1", "3")]),
        &config(ChartType::Bar),
    );
    let indices: Vec<usize> = data.points().iter().map(|p| p.row_index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_row_key_resolves_without_schema_entry() {
    let rows = vec![row(&[("Extra", "1")])];
    let resolved = resolve_field(&schema(), &rows, "Extra");
    assert!(resolved.is_resolved());
    assert!(matches!(resolved, FieldRef::Resolved { field_type: None, .. }));
    assert!(!resolve_field(&schema(), &rows, "Missing").is_resolved());
    assert!(!resolve_field(&schema(), &rows, "").is_resolved());
}

#[test]
fn test_dangling_axis_gives_empty_body() {
    let config = ChartConfig::new("c", ChartType::Bar).with_axes("Label", "Gone");
    let data = process_chart_data(&schema(), &rows(&[("A", "1")]), &config);
    assert_eq!(data.body, ChartBody::Empty);
    assert!(data.is_empty());
}

#[test]
fn test_pie_ignores_y_axis() {
    let config = ChartConfig::new("c", ChartType::Pie).with_axes("Label", "Gone");
    let data = process_chart_data(&schema(), &rows(&[("A", "1"), ("A", "2")]), &config);
    assert_eq!(data.slices().len(), 1);
    assert_eq!(data.slices()[0].count, 2);
}

// ============================================================================
// Domains and colors
// ============================================================================

#[test]
fn test_scatter_uses_numeric_x_domain() {
    let data = process_chart_data(
        &schema(),
        &rows(&[("3", "1"), ("7", "2")]),
        &config(ChartType::Scatter),
    );
    assert_eq!(
        data.x_domain(),
        Some(&XDomain::Numeric(NumericDomain { min: 0.0, max: 7.0 }))
    );
}

#[test]
fn test_pie_slices_keep_first_seen_order_and_cycle_colors() {
    let config = config(ChartType::Pie).with_color_scheme(ColorScheme::Blue);
    let data = process_chart_data(
        &schema(),
        &rows(&[("B", "1"), ("A", "1"), ("B", "1")]),
        &config,
    );
    let labels: Vec<&str> = data.slices().iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["B", "A"]);
    assert_ne!(data.slices()[0].color, data.slices()[1].color);

    let ChartBody::Slices { total, .. } = data.body else {
        panic!("expected slices");
    };
    assert_eq!(total, 3);
}

#[test]
fn test_processing_is_deterministic() {
    let rows = rows(&[("A", "4"), ("B", "2"), ("A", "9")]);
    for chart_type in ChartType::all() {
        let first = process_chart_data(&schema(), &rows, &config(*chart_type));
        let second = process_chart_data(&schema(), &rows, &config(*chart_type));
        assert_eq!(first, second, "{} differs between runs", chart_type.as_str());
    }
}
