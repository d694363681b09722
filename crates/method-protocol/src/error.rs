//! Error type for malformed method-result payloads.

use std::str::Utf8Error;
use thiserror::Error;

/// A method-result body that is neither empty nor valid UTF-8 JSON.
///
/// Returned only by the body-carrying constructors of
/// [`MethodResponse`](crate::MethodResponse). Messages are single-line and
/// never echo the payload.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("malformed method result: invalid UTF-8 at byte {valid_up_to}")]
    InvalidUtf8 {
        /// Byte offset of the first invalid sequence.
        valid_up_to: usize,
        #[source]
        source: Utf8Error,
    },

    #[error("malformed method result: {source}")]
    InvalidJson {
        /// 1-based line reported by the JSON parser.
        line: usize,
        /// 1-based column reported by the JSON parser.
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed method result: value could not be serialized: {source}")]
    Unserializable {
        #[source]
        source: serde_json::Error,
    },
}

impl ValidationError {
    /// Stable error code for automation.
    pub fn code(&self) -> &'static str {
        crate::MALFORMED_PAYLOAD
    }

    /// Short human-readable location of the failure.
    pub fn position(&self) -> String {
        match self {
            Self::InvalidUtf8 { valid_up_to, .. } => format!("byte {}", valid_up_to),
            Self::InvalidJson { line, column, .. } => format!("line {}, column {}", line, column),
            Self::Unserializable { .. } => "serialization".to_string(),
        }
    }
}

impl From<Utf8Error> for ValidationError {
    fn from(source: Utf8Error) -> Self {
        Self::InvalidUtf8 {
            valid_up_to: source.valid_up_to(),
            source,
        }
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(source: serde_json::Error) -> Self {
        Self::InvalidJson {
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}
