//! Schema data structures.
//!
//! ## Architecture
//!
//! - [`item`] - Type tags, defaults and schema entries
//! - [`schema`] - The immutable schema table and its process-wide instance
//! - [`export`] - JSON and JSON Schema export
//! - [`check`] - Shape checking of attribute documents

/// Type tags, default values and schema entries.
pub mod item;

/// The schema table.
pub mod schema;

/// JSON and JSON Schema export of the table.
pub mod export;

/// Type-tag checking of flat attribute documents.
pub mod check;

pub use schema::{Schema, get_schema};
