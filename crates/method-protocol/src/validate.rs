//! JSON-or-empty payload validation.

use serde::de::IgnoredAny;

use crate::error::ValidationError;

/// Check that a method-result body is absent, empty, or a single JSON value.
///
/// Any top-level JSON token is accepted, not only objects. Whitespace may
/// surround the value; anything else after it is rejected.
pub fn validate_empty_or_json(data: Option<&[u8]>) -> Result<(), ValidationError> {
    let bytes = match data {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => return Ok(()),
    };

    let text = std::str::from_utf8(bytes)?;
    serde_json::from_str::<IgnoredAny>(text)?;
    Ok(())
}
