//! # pickerctl
//!
//! Command-line companion for the barcode picker attribute schema.
//!
//! ## Features
//!
//! - **List**: print every attribute identifier in declaration order
//! - **Show**: print the type tag and default of one attribute
//! - **Dump**: export the schema table or its defaults as JSON or TOML
//! - **JSON Schema**: emit a Draft 2020-12 schema for editor tooling
//! - **Check**: type-tag a JSON/TOML attribute document
//!
//! ## Modules
//!
//! - [`commands`] - Command handlers
//! - [`config`] - `.pickerctl.toml` configuration
//! - [`utils`] - Document loading and output rendering

/// Command handlers.
pub mod commands;

/// CLI configuration loaded from `.pickerctl.toml`.
pub mod config;

/// Document loading and output rendering helpers.
pub mod utils;

#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;
