//! Backend call failures.
//!
//! ERROR HANDLING
//! ==============
//! The UI does not distinguish network, validation, or business-rule failures.
//! It only reads the optional `message` the backend puts in an error body, so
//! every variant funnels through [`ApiError::user_message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("backend responded with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// No backend is reachable from this build (server-side render).
    #[error("backend not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message supplied by the backend in the error body, if any.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// Backend message, or `fallback` when the backend gave none.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or(fallback).to_owned()
    }

    /// Backend message, or this error's own description.
    #[must_use]
    pub fn detail(&self) -> String {
        self.backend_message()
            .map_or_else(|| self.to_string(), str::to_owned)
    }
}

/// Extract `message` from a JSON error body such as `{"message": "Usuario ya existe"}`.
#[must_use]
pub fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_owned)
}
