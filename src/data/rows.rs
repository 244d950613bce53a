//! Row store
//!
//! Ordered collection of [`DataRow`]s. Identity is positional; the store does
//! no schema validation of its own.

use crate::data::error::{DataError, DataResult};
use crate::types::DataRow;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowStore {
    rows: Vec<DataRow>,
}

impl RowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<DataRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DataRow> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataRow> {
        self.rows.iter()
    }

    /// Append a row at the end
    pub fn add_row(&mut self, row: DataRow) {
        self.rows.push(row);
    }

    /// Replace the row at `index` wholesale
    pub fn update_row(&mut self, index: usize, row: DataRow) -> DataResult<()> {
        let len = self.rows.len();
        let slot = self
            .rows
            .get_mut(index)
            .ok_or(DataError::RowIndex { index, len })?;
        *slot = row;
        Ok(())
    }

    /// Set one field of an existing row
    pub fn update_cell(&mut self, index: usize, field: &str, value: impl Into<String>) -> DataResult<()> {
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(DataError::RowIndex { index, len })?;
        row.set(field, value);
        Ok(())
    }

    /// Remove the row at `index`; later rows shift down by one
    pub fn remove_row(&mut self, index: usize) -> DataResult<DataRow> {
        if index >= self.rows.len() {
            return Err(DataError::RowIndex {
                index,
                len: self.rows.len(),
            });
        }
        Ok(self.rows.remove(index))
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Replace all rows wholesale
    pub fn set_rows(&mut self, rows: Vec<DataRow>) {
        self.rows = rows;
    }
}

impl<'a> IntoIterator for &'a RowStore {
    type Item = &'a DataRow;
    type IntoIter = std::slice::Iter<'a, DataRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
