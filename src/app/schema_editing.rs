//! Schema editing - add, remove, reorder fields and load sample schemas

use super::events::StoreEvent;
use crate::app::Playground;
use crate::data::{DataResult, MoveDirection, SampleSchema, random_sample_schema};
use crate::types::{FieldType, SchemaField};

impl Playground {
    /// Replace the field sequence wholesale.
    ///
    /// No uniqueness check; callers validate new names with
    /// [`crate::data::Schema::validate_new_field`] first.
    pub fn set_schema(&mut self, fields: Vec<SchemaField>) {
        self.schema.set_fields(fields);
        self.commit(vec![StoreEvent::SchemaChanged]);
    }

    /// Append a field. Existing rows are kept and simply lack the new key.
    pub fn add_field(&mut self, name: &str, field_type: FieldType) -> DataResult<()> {
        self.schema.add_field(name, field_type)?;
        tracing::debug!(field = name.trim(), field_type = field_type.as_str(), "Added field");
        self.commit(vec![StoreEvent::SchemaChanged]);
        Ok(())
    }

    /// Remove the field at `index` and clear every row
    pub fn remove_field(&mut self, index: usize) -> DataResult<SchemaField> {
        let removed = self.schema.remove_field(index)?;
        self.rows.clear();
        tracing::debug!(field = %removed.name, "Removed field, rows cleared");
        self.commit(vec![StoreEvent::SchemaChanged, StoreEvent::DataChanged]);
        Ok(removed)
    }

    /// Swap a field with its neighbour; boundary moves are silent no-ops
    pub fn move_field(&mut self, index: usize, direction: MoveDirection) -> bool {
        let moved = self.schema.move_field(index, direction);
        if moved {
            self.commit(vec![StoreEvent::SchemaChanged]);
        }
        moved
    }

    /// Replace the schema with a sample schema and clear rows
    pub fn load_sample_schema(&mut self, sample: &SampleSchema) {
        self.schema.set_fields(sample.to_fields());
        self.rows.clear();
        tracing::info!(schema = sample.name, "Loaded sample schema");
        self.commit(vec![StoreEvent::SchemaChanged, StoreEvent::DataChanged]);
    }

    /// Load one of the sample schemas at random; returns its name
    pub fn load_random_sample_schema(&mut self) -> &'static str {
        let sample = random_sample_schema();
        self.load_sample_schema(sample);
        sample.name
    }
}
