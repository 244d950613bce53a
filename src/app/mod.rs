//! Application module - the playground store and its operations.
//!
//! This module is organized into several submodules:
//! - `state` - The Playground struct and read accessors
//! - `events` - Store events and the subscriber registry
//! - `lifecycle` - Construction, restore and session teardown
//! - `schema_editing` - Field add/remove/reorder and sample schemas
//! - `table_editing` - Row and cell edits, sample data
//! - `data_viz` - Chart configs, selection, rendering and SVG export
//! - `json_tools` - JSON import/export
//! - `render_cache` - Per-chart render cache

mod data_viz;
mod events;
mod json_tools;
mod lifecycle;
mod render_cache;
mod schema_editing;
mod state;
mod table_editing;

pub use events::{StoreEvent, SubscriptionId};
pub use render_cache::{CacheStats, RenderCache};
pub use state::Playground;
