//! Device Method - direct method response tooling
//!
//! Re-exports the validated [`MethodResponse`] type and provides the payload
//! check used by the `device-method` command-line tool.

pub mod check;

pub use check::{check_payload, CheckError, CheckReport};
pub use method_protocol::{validate_empty_or_json, MethodResponse, ValidationError};
