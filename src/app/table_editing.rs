//! Row editing - add, update and remove rows, cell edits and sample data

use super::events::StoreEvent;
use crate::app::Playground;
use crate::data::{DataResult, sample_rows_for};
use crate::types::DataRow;

impl Playground {
    /// Append a row after checking required fields.
    ///
    /// Every non-number field needs a non-empty value; the error names the
    /// first offending field and the row is not appended.
    pub fn add_row(&mut self, row: DataRow) -> DataResult<()> {
        self.schema.validate_row(&row)?;
        self.rows.add_row(row);
        self.commit(vec![StoreEvent::DataChanged]);
        Ok(())
    }

    /// Replace the row at `index` wholesale
    pub fn update_row(&mut self, index: usize, row: DataRow) -> DataResult<()> {
        self.rows.update_row(index, row)?;
        self.commit(vec![StoreEvent::DataChanged]);
        Ok(())
    }

    /// Set one cell of an existing row
    pub fn update_cell(&mut self, index: usize, field: &str, value: impl Into<String>) -> DataResult<()> {
        self.rows.update_cell(index, field, value)?;
        self.commit(vec![StoreEvent::DataChanged]);
        Ok(())
    }

    pub fn remove_row(&mut self, index: usize) -> DataResult<DataRow> {
        let removed = self.rows.remove_row(index)?;
        self.commit(vec![StoreEvent::DataChanged]);
        Ok(removed)
    }

    pub fn clear_data(&mut self) {
        self.rows.clear();
        self.commit(vec![StoreEvent::DataChanged]);
    }

    /// Replace all rows wholesale
    pub fn set_data(&mut self, rows: Vec<DataRow>) {
        self.rows.set_rows(rows);
        self.commit(vec![StoreEvent::DataChanged]);
    }

    /// Replace rows with sample data shaped by the current schema.
    ///
    /// Returns the number of rows loaded (zero without a schema).
    pub fn load_sample_data(&mut self) -> usize {
        if self.schema.is_empty() {
            return 0;
        }
        let rows = sample_rows_for(self.schema.fields());
        let count = rows.len();
        tracing::info!(rows = count, "Loaded sample data");
        self.set_data(rows);
        count
    }
}
