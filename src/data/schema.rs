//! Schema model
//!
//! Ordered list of typed field definitions. Field order drives default
//! column order and default chart axis bindings.

use crate::data::error::{DataError, DataResult};
use crate::types::{DataRow, FieldType, SchemaField};
use serde::{Deserialize, Serialize};

/// Direction for [`Schema::move_field`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Ordered sequence of [`SchemaField`]s
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: Vec<SchemaField>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: Vec<SchemaField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<SchemaField> {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SchemaField> {
        self.fields.get(index)
    }

    /// Look up a field by exact (case-sensitive) name
    pub fn find(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Fields declared as numbers, in schema order
    pub fn number_fields(&self) -> impl Iterator<Item = &SchemaField> {
        self.fields
            .iter()
            .filter(|f| f.field_type == FieldType::Number)
    }

    /// Replace the field sequence wholesale.
    ///
    /// No uniqueness check happens here; use [`Schema::validate_new_field`]
    /// at the call site.
    pub fn set_fields(&mut self, fields: Vec<SchemaField>) {
        self.fields = fields;
    }

    /// Check that `name` is usable for a new field, returning the trimmed name
    pub fn validate_new_field<'a>(&self, name: &'a str) -> DataResult<&'a str> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DataError::EmptyFieldName);
        }
        if self.contains(trimmed) {
            return Err(DataError::DuplicateField(trimmed.to_string()));
        }
        Ok(trimmed)
    }

    /// Append a new field
    pub fn add_field(&mut self, name: &str, field_type: FieldType) -> DataResult<()> {
        let name = self.validate_new_field(name)?;
        self.fields.push(SchemaField::new(name, field_type));
        Ok(())
    }

    /// Remove the field at `index`.
    ///
    /// Callers must clear the row store afterwards; rows are keyed by field
    /// name and have no migration path.
    pub fn remove_field(&mut self, index: usize) -> DataResult<SchemaField> {
        if index >= self.fields.len() {
            return Err(DataError::FieldIndex {
                index,
                len: self.fields.len(),
            });
        }
        Ok(self.fields.remove(index))
    }

    /// Swap the field at `index` with its neighbour.
    ///
    /// Moving the first field up or the last field down is a no-op, as is an
    /// out-of-range index. Returns whether anything moved.
    pub fn move_field(&mut self, index: usize, direction: MoveDirection) -> bool {
        if index >= self.fields.len() {
            return false;
        }
        let target = match direction {
            MoveDirection::Up if index == 0 => return false,
            MoveDirection::Up => index - 1,
            MoveDirection::Down if index + 1 == self.fields.len() => return false,
            MoveDirection::Down => index + 1,
        };
        self.fields.swap(index, target);
        true
    }

    /// Check a candidate row against the schema.
    ///
    /// Every non-number field needs a non-empty value; number fields may be
    /// blank and read as zero when charted.
    pub fn validate_row(&self, row: &DataRow) -> DataResult<()> {
        for field in &self.fields {
            if field.field_type.is_required() && row.get(&field.name).is_empty() {
                return Err(DataError::RequiredField(field.name.clone()));
            }
        }
        Ok(())
    }
}
