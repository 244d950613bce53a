//! JSON import/export of schema and rows

use super::events::StoreEvent;
use crate::app::Playground;
use crate::data::{self, DataResult};

impl Playground {
    /// Export document for the current schema and rows
    pub fn export_json(&self) -> String {
        data::export_json(self.schema.fields(), self.rows.rows())
    }

    /// Replace schema and rows from an export document.
    ///
    /// Charts are left alone and may dangle afterwards. On error nothing
    /// changes.
    pub fn import_json(&mut self, text: &str) -> DataResult<()> {
        let imported = match data::import_json(text) {
            Ok(imported) => imported,
            Err(e) => {
                tracing::warn!("Rejected import: {}", e);
                return Err(e);
            }
        };

        tracing::info!(
            fields = imported.schema.len(),
            rows = imported.rows.len(),
            "Imported data"
        );
        self.schema.set_fields(imported.schema);
        self.rows.set_rows(imported.rows);
        self.commit(vec![StoreEvent::SchemaChanged, StoreEvent::DataChanged]);
        Ok(())
    }
}
