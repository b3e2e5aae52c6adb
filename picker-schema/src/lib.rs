//! # picker-schema
//!
//! Attribute schema for the barcode picker web component.
//!
//! The web component exposes the scanning SDK's configuration surface as HTML
//! attributes. This crate declares that surface: every attribute name, the
//! type tag describing how its raw value is interpreted, and its default.
//!
//! ## Features
//!
//! - Closed [`Attribute`] enumeration with exact string identifiers
//! - Process-wide, lazily built, immutable [`Schema`] table
//! - Mirrors of the SDK enums used as defaults ([`sdk`])
//! - JSON and JSON Schema (Draft 2020-12) export
//! - Shape checking of flat attribute documents against the type tags
//!
//! ## Quick Start
//!
//! ```rust
//! use picker_schema::{get_schema, Attribute, DefaultValue, TypeTag};
//!
//! let schema = get_schema();
//! let fps = schema.get(Attribute::TargetScanningFps);
//! assert_eq!(fps.ty, TypeTag::Integer);
//! assert_eq!(fps.default, Some(DefaultValue::Integer(30)));
//!
//! assert!(schema.lookup("camera").unwrap().default.is_none());
//! ```
//!
//! ## Modules
//!
//! - [`attribute`] - Attribute identifiers
//! - [`data`] - Schema entries, the schema table and its exports
//! - [`error`] - Error types
//! - [`sdk`] - Scanning SDK enum mirrors

#[macro_use]
extern crate log;

/// Attribute identifiers of the web component.
pub mod attribute;

/// Schema entries, the schema table and document checking.
pub mod data;

/// Error types for parsing identifiers and SDK values.
pub mod error;

/// Mirrors of the scanning SDK enums referenced by defaults.
pub mod sdk;

pub use attribute::{Attribute, attributes};
pub use data::{
    check::Finding,
    item::{DefaultValue, SchemaEntry, TypeTag},
    schema::{Schema, get_schema},
};
pub use error::{Result, SchemaError};
pub use serde_json::Value;
