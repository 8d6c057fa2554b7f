//! Unified error types for csvbody.
//!
//! This module provides a single [`CsvError`] enum that covers every way an
//! encode can fail. Encoding is pure and deterministic, so none of these are
//! worth retrying with the same input: they propagate to the caller, which
//! decides how to surface them (typically as a 5xx from the transport layer).
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **No partial output**: an error means no payload at all

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for csvbody operations.
///
/// # Example
///
/// ```rust
/// use csvbody::error::Result;
/// use csvbody::Record;
///
/// fn build_rows() -> Result<Vec<Record>> {
///     Ok(vec![Record::ordered(["a", "b"])])
/// }
/// ```
pub type Result<T> = std::result::Result<T, CsvError>;

/// The error type for all csvbody operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CsvError {
    /// A record was neither an ordered sequence nor a keyed mapping.
    ///
    /// Records built through the typed API can't hit this; it comes from
    /// dynamic sources such as a JSON scalar where a row was expected.
    #[error("Invalid record shape: expected an array or an object, found {found}")]
    InvalidRecordShape {
        /// Name of the shape that was found (e.g. "string", "number")
        found: &'static str,
    },

    /// A field value was an array or an object.
    ///
    /// Fields must be scalars; nested values have to be flattened by the
    /// caller before encoding.
    #[error("Nested {found} cannot be encoded as a CSV field; flatten it first")]
    NestedField {
        /// Name of the nested shape ("array" or "object")
        found: &'static str,
    },

    /// The configured output encoding is not one the transcoder can produce.
    #[error("Unsupported output encoding '{label}'")]
    UnsupportedEncoding {
        /// The charset label from the configuration
        label: String,
    },

    /// The payload contains a character the target charset can't represent.
    #[error("Cannot transcode {character:?} (U+{}) to {charset}", code_point(.character))]
    TranscodeFailure {
        /// Canonical name of the target charset
        charset: &'static str,
        /// The first character without a representation
        character: char,
    },

    /// An I/O error occurred while writing a finished payload.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A value could not be serialized into a record.
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn code_point(character: &char) -> String {
    format!("{:04X}", u32::from(*character))
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl CsvError {
    /// Creates an invalid record shape error.
    pub fn invalid_record_shape(found: &'static str) -> Self {
        CsvError::InvalidRecordShape { found }
    }

    /// Creates a nested field error.
    pub fn nested_field(found: &'static str) -> Self {
        CsvError::NestedField { found }
    }

    /// Creates an unsupported encoding error.
    pub fn unsupported_encoding(label: impl Into<String>) -> Self {
        CsvError::UnsupportedEncoding {
            label: label.into(),
        }
    }

    /// Creates a transcode failure error.
    pub fn transcode_failure(charset: &'static str, character: char) -> Self {
        CsvError::TranscodeFailure { charset, character }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, CsvError::Io(_))
    }

    /// Returns `true` if a record or field had an unusable shape.
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            CsvError::InvalidRecordShape { .. } | CsvError::NestedField { .. }
        )
    }

    /// Returns `true` if the error came from charset resolution or transcoding.
    pub fn is_encoding(&self) -> bool {
        matches!(
            self,
            CsvError::UnsupportedEncoding { .. } | CsvError::TranscodeFailure { .. }
        )
    }
}
