//! Error types and result definitions.

use thiserror::Error;

/// Errors raised while parsing identifiers or exporting the schema.
///
/// Building and reading the schema table never fails; these only come from
/// turning caller-supplied strings into typed values.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The name is not one of the declared attribute identifiers.
    #[error("unknown attribute: {0:?}")]
    UnknownAttribute(String),

    /// The string does not name a member of an SDK enum.
    #[error("unknown {kind} value: {value:?}")]
    UnknownVariant {
        /// Type tag of the enum, e.g. `cameraType`.
        kind: &'static str,
        /// Rejected input.
        value: String,
    },

    /// JSON serialization failed during export.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type used throughout the crate.
pub type Result<T, E = SchemaError> = std::result::Result<T, E>;
