//! Direct method response type.

use serde::Serialize;

use crate::error::ValidationError;
use crate::validate::validate_empty_or_json;

/// Response returned by a device-side direct method handler.
///
/// The body is checked once, at construction, and is absent, empty, or
/// valid UTF-8 JSON for the lifetime of the value. Fields are private so a
/// constructed response cannot be changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodResponse {
    status: i32,
    result: Option<Vec<u8>>,
}

impl MethodResponse {
    /// Create a response with an optional body, validating that the body is
    /// empty or JSON.
    ///
    /// The bytes are stored verbatim; they are never re-serialized.
    pub fn new<B: Into<Vec<u8>>>(result: Option<B>, status: i32) -> Result<Self, ValidationError> {
        let result = result.map(Into::into);
        validate_empty_or_json(result.as_deref())?;
        Ok(Self { status, result })
    }

    /// Create a response carrying a body.
    pub fn with_body(body: impl Into<Vec<u8>>, status: i32) -> Result<Self, ValidationError> {
        Self::new(Some(body), status)
    }

    /// Create a response whose body is `value` serialized as JSON.
    pub fn from_json<T: Serialize + ?Sized>(
        value: &T,
        status: i32,
    ) -> Result<Self, ValidationError> {
        let body = serde_json::to_vec(value)
            .map_err(|source| ValidationError::Unserializable { source })?;
        Self::with_body(body, status)
    }

    /// Create a response with no body.
    pub fn status_only(status: i32) -> Self {
        Self { status, result: None }
    }

    /// Status code reported to the caller.
    pub fn status(&self) -> i32 {
        self.status
    }

    /// Raw body bytes, exactly as supplied.
    pub fn result(&self) -> Option<&[u8]> {
        self.result.as_deref()
    }

    /// Body as text, or `None` when the body is absent or empty.
    pub fn result_as_text(&self) -> Option<&str> {
        // Non-empty bodies passed UTF-8 decoding in the constructor.
        self.result
            .as_deref()
            .filter(|bytes| !bytes.is_empty())
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    /// True when a non-empty body is present.
    pub fn has_result(&self) -> bool {
        self.result.as_ref().is_some_and(|bytes| !bytes.is_empty())
    }

    /// Consume the response, returning the status and body.
    pub fn into_parts(self) -> (i32, Option<Vec<u8>>) {
        (self.status, self.result)
    }
}
