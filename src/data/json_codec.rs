//! JSON import/export
//!
//! Serializes `{schema, data}` to a pretty-printed document and validates the
//! same shape on the way back in. Import never merges: on success the caller
//! replaces schema and rows wholesale; on failure nothing is touched.

use crate::data::error::{DataError, DataResult};
use crate::types::{DataRow, FieldType, SchemaField};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

/// Suggested file name for downloads
pub const EXPORT_FILE_NAME: &str = "data-playground-export.json";

#[derive(Serialize)]
struct ExportDocument<'a> {
    schema: &'a [SchemaField],
    data: &'a [DataRow],
}

/// A validated import, ready to replace the current schema and rows
#[derive(Clone, Debug, PartialEq)]
pub struct ImportedData {
    pub schema: Vec<SchemaField>,
    pub rows: Vec<DataRow>,
}

/// Convert schema and rows to the export document (pretty JSON)
pub fn export_json(schema: &[SchemaField], rows: &[DataRow]) -> String {
    let document = ExportDocument { schema, data: rows };
    serde_json::to_string_pretty(&document)
        .unwrap_or_else(|_| "{\n  \"schema\": [],\n  \"data\": []\n}".to_string())
}

/// Parse and validate an export document
pub fn import_json(text: &str) -> DataResult<ImportedData> {
    if text.trim().is_empty() {
        return Err(DataError::EmptyDocument);
    }

    let value: Value = serde_json::from_str(text)?;

    let schema_entries = match value.get("schema") {
        Some(Value::Array(entries)) => entries,
        _ => return Err(DataError::SchemaShape),
    };
    let data_entries = match value.get("data") {
        Some(Value::Array(entries)) => entries,
        _ => return Err(DataError::data_shape("data is missing or not an array")),
    };

    let schema = parse_schema(schema_entries)?;
    let rows = data_entries
        .iter()
        .enumerate()
        .map(|(i, entry)| parse_row(i, entry))
        .collect::<DataResult<Vec<_>>>()?;

    Ok(ImportedData { schema, rows })
}

fn parse_schema(entries: &[Value]) -> DataResult<Vec<SchemaField>> {
    let mut seen = HashSet::new();
    let mut fields = Vec::with_capacity(entries.len());

    for entry in entries {
        let name = entry.get("name").and_then(Value::as_str).unwrap_or("");
        let type_name = entry.get("type").and_then(Value::as_str).unwrap_or("");
        if name.is_empty() || type_name.is_empty() {
            return Err(DataError::field_shape("each field must have a name and type"));
        }

        let field_type = FieldType::parse(type_name).ok_or_else(|| {
            DataError::field_shape(format!(
                "invalid field type \"{}\", must be text, number, or date",
                type_name
            ))
        })?;

        if !seen.insert(name) {
            return Err(DataError::field_shape(format!(
                "field name \"{}\" appears more than once",
                name
            )));
        }

        fields.push(SchemaField::new(name, field_type));
    }

    Ok(fields)
}

fn parse_row(index: usize, entry: &Value) -> DataResult<DataRow> {
    let obj = entry
        .as_object()
        .ok_or_else(|| DataError::data_shape(format!("data entry {} is not an object", index)))?;

    Ok(DataRow::from_pairs(
        obj.iter().map(|(k, v)| (k.clone(), json_value_to_text(v))),
    ))
}

/// Flatten a JSON value into the textual cell representation
pub fn json_value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(arr) => arr
            .iter()
            .map(|v| format!("{}", v))
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}
