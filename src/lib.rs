//! Data Playground
//!
//! A schema-governed table of rows with chart bindings. Charts are
//! declarative configs resolved against the current schema at render time
//! into [`data::ChartData`], then drawn as SVG through plotters.
//!
//! - [`app::Playground`] - the store: schema, rows, charts, persistence, events
//! - [`data`] - schema rules, row storage, chart engine, JSON codec, samples
//! - [`render`] - plotters drawing and SVG documents
//! - [`session`] - session-scoped storage backends
//! - [`settings`] - user settings
//! - [`cli`] - command line front end

pub mod app;
pub mod cli;
pub mod constants;
pub mod data;
pub mod logging;
pub mod render;
pub mod session;
pub mod settings;
pub mod types;

pub use app::{Playground, StoreEvent};
pub use types::{ChartConfig, ChartConfigUpdate, ChartType, ColorScheme, DataRow, FieldType, SchemaField};
