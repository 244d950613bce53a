//! JSON import/export tests.

use crate::helpers::row;
use data_playground::data::{DataError, ErrorKind, export_json, import_json};
use data_playground::types::{FieldType, SchemaField};

#[test]
fn test_round_trip_preserves_schema_and_rows() {
    let schema = vec![
        SchemaField::text("Product"),
        SchemaField::number("Sales"),
        SchemaField::date("Launched"),
    ];
    let rows = vec![
        row(&[("Product", "A"), ("Sales", "10"), ("Launched", "2023-01-01")]),
        row(&[("Product", "B"), ("Sales", ""), ("Launched", "2023-02-01")]),
    ];

    let imported = import_json(&export_json(&schema, &rows)).unwrap();
    assert_eq!(imported.schema, schema);
    assert_eq!(imported.rows, rows);
}

#[test]
fn test_empty_text_is_rejected() {
    let err = import_json("   ").unwrap_err();
    assert!(matches!(err, DataError::EmptyDocument));
    assert_eq!(err.kind(), ErrorKind::Import);
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let err = import_json("{ not json").unwrap_err();
    assert!(matches!(err, DataError::Parse(_)));
    assert!(err.to_string().starts_with("Error parsing JSON"));
}

#[test]
fn test_schema_must_be_an_array() {
    let err = import_json(r#"{"schema": {}, "data": []}"#).unwrap_err();
    assert!(matches!(err, DataError::SchemaShape));
}

#[test]
fn test_data_must_be_an_array() {
    let err = import_json(r#"{"schema": []}"#).unwrap_err();
    assert!(matches!(err, DataError::DataShape(_)));
}

#[test]
fn test_unknown_field_type_is_rejected() {
    let err = import_json(r#"{"schema": [{"name": "X", "type": "currency"}], "data": []}"#)
        .unwrap_err();
    assert!(matches!(err, DataError::FieldShape(_)));
    assert!(err.to_string().contains("currency"));
}

#[test]
fn test_duplicate_field_names_are_rejected() {
    let text = r#"{"schema": [{"name": "X", "type": "text"}, {"name": "X", "type": "number"}], "data": []}"#;
    assert!(matches!(import_json(text).unwrap_err(), DataError::FieldShape(_)));
}

#[test]
fn test_non_string_values_become_text() {
    let text = r#"{
        "schema": [{"name": "N", "type": "number"}, {"name": "B", "type": "text"}],
        "data": [{"N": 12.5, "B": true, "Z": null}]
    }"#;
    let imported = import_json(text).unwrap();
    assert_eq!(imported.schema[0].field_type, FieldType::Number);
    let row = &imported.rows[0];
    assert_eq!(row.get("N"), "12.5");
    assert_eq!(row.get("B"), "true");
    assert_eq!(row.get("Z"), "");
    assert!(row.contains("Z"));
}

#[test]
fn test_non_object_row_is_rejected() {
    let err = import_json(r#"{"schema": [], "data": [1]}"#).unwrap_err();
    assert!(matches!(err, DataError::DataShape(_)));
}
