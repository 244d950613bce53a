//! Data model and derivation
//!
//! Schema, row and chart stores, the JSON import/export codec, sample data,
//! and the chart engine that turns `(schema, rows, config)` into chart-ready
//! data.
//!
//! ## Error Handling
//!
//! Mutations return `DataResult<T>` which uses the `DataError` type.
//! Common errors include:
//! - `EmptyFieldName`/`DuplicateField`/`RequiredField`: rejected input
//! - `RowIndex`/`FieldIndex`: stale positional index
//! - `Parse`/`SchemaShape`/`DataShape`/`FieldShape`: rejected import
//!
//! The chart engine has no error channel.

mod chart_engine;
mod chart_store;
mod error;
mod json_codec;
mod rows;
mod samples;
mod schema;

pub use chart_engine::*;
pub use chart_store::*;
pub use error::*;
pub use json_codec::*;
pub use rows::*;
pub use samples::*;
pub use schema::*;
