//! Payload check reports
//!
//! Runs a candidate method-result body through the same constructor a
//! device-side handler uses and describes the outcome.

use method_protocol::{MethodResponse, ValidationError};
use serde::{Deserialize, Serialize};

/// Outcome of checking one payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Whether a response could be constructed
    pub ok: bool,

    /// Status code the response was built with
    pub status: i32,

    /// Body length in bytes (absent for status-only responses and rejections)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_bytes: Option<usize>,

    /// Body text (absent when the body is absent or empty)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,

    /// Failure details (present when ok=false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CheckError>,
}

/// Machine-readable rejection details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckError {
    pub code: String,
    pub message: String,
    pub position: String,
}

impl From<&ValidationError> for CheckError {
    fn from(err: &ValidationError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            position: err.position(),
        }
    }
}

impl CheckReport {
    /// Describe a constructed response.
    pub fn accepted(response: &MethodResponse) -> Self {
        Self {
            ok: true,
            status: response.status(),
            result_bytes: response.result().map(<[u8]>::len),
            result: response.result_as_text().map(str::to_string),
            error: None,
        }
    }

    /// Describe a rejected payload.
    pub fn rejected(status: i32, err: &ValidationError) -> Self {
        Self {
            ok: false,
            status,
            result_bytes: None,
            result: None,
            error: Some(err.into()),
        }
    }

    /// Format as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Format as human-readable text
    pub fn to_human(&self) -> String {
        let mut output = String::new();

        if self.ok {
            output.push_str(&format!("ACCEPTED (status {})\n", self.status));
            match (self.result_bytes, &self.result) {
                (None, _) => output.push_str("Body: none\n"),
                (Some(_), None) => output.push_str("Body: empty\n"),
                (Some(len), Some(text)) => {
                    output.push_str(&format!("Body: {} bytes\n", len));
                    output.push_str(text);
                    if !text.ends_with('\n') {
                        output.push('\n');
                    }
                }
            }
        } else {
            output.push_str(&format!("REJECTED (status {})\n", self.status));
            if let Some(ref err) = self.error {
                output.push_str(&format!("Code: {}\n", err.code));
                output.push_str(&format!("Position: {}\n", err.position));
                output.push_str(&format!("Reason: {}\n", err.message));
            }
        }

        output
    }
}

/// Build a response from `bytes` and report whether it was accepted.
pub fn check_payload(bytes: Vec<u8>, status: i32) -> CheckReport {
    match MethodResponse::with_body(bytes, status) {
        Ok(response) => CheckReport::accepted(&response),
        Err(err) => CheckReport::rejected(status, &err),
    }
}
