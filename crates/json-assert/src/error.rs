//! JSON assertion errors.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Reasons a JSON assertion could not be evaluated, or did not hold.
#[derive(Debug, Error)]
pub enum JsonAssertionError {
    /// The document under test or an expected document is not valid JSON.
    #[error("invalid JSON {json}: {source}")]
    InvalidJson {
        /// Abbreviated representation of the offending text.
        json: String,

        /// Parser error.
        #[source]
        source: serde_json::Error,
    },

    /// The query is not a valid JSON path.
    #[error("invalid JSON path '{path}': {source}")]
    InvalidPath {
        /// The rejected query.
        path: String,

        /// Path parser error.
        #[source]
        source: serde_json_path::ParseError,
    },

    /// The query located nothing.
    #[error("JSON object {json} should contain '{path}' path but it doesn't")]
    MissingPath {
        /// Abbreviated representation of the document.
        json: String,

        /// The query that located nothing.
        path: String,
    },

    /// The query located a value that does not deserialize into the requested type.
    #[error(
        "JSON object {json} should contain an element with type {expected} by '{path}' path but it contains '{actual}'"
    )]
    UnexpectedType {
        /// Abbreviated representation of the document.
        json: String,

        /// The query.
        path: String,

        /// Requested Rust type.
        expected: &'static str,

        /// The located value, compact-encoded.
        actual: String,
    },

    /// An expected value could not be encoded as JSON.
    #[error("expected value cannot be encoded as JSON: {0}")]
    UnencodableValue(#[source] serde_json::Error),

    /// A resource file could not be read.
    #[error("failed to read JSON resource {path}: {source}")]
    Resource {
        /// Resolved resource location.
        path: PathBuf,

        /// I/O error.
        #[source]
        source: io::Error,
    },

    /// A matcher did not hold.
    #[error("{0}")]
    Mismatch(String),
}
