//! Direct Method Protocol Types
//!
//! Defines the response a device-side handler returns for a direct method
//! call: a status code and an optional JSON body.

pub mod error;
pub mod response;
pub mod validate;

pub use error::ValidationError;
pub use response::MethodResponse;
pub use validate::validate_empty_or_json;

/// Error code reported for payloads that fail the JSON-or-empty check.
pub const MALFORMED_PAYLOAD: &str = "MALFORMED_PAYLOAD";
