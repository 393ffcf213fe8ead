//! Opaque credential forwarding
//!
//! This service never issues or interprets credentials. The caller's
//! `Authorization` header is captured as-is and forwarded verbatim to the
//! customer service, which owns the authorization decision.

use axum::http::{header, HeaderMap};

/// The caller's authorization credential, treated as an opaque value
///
/// `None` means the caller sent no `Authorization` header; the credential is
/// still "forwarded" in that case by sending no header downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credential(Option<String>);

impl Credential {
    /// A credential from a raw header value
    pub fn new(value: impl Into<String>) -> Self {
        Credential(Some(value.into()))
    }

    /// The absent credential
    pub fn none() -> Self {
        Credential(None)
    }

    /// Capture the `Authorization` header from an inbound request
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Credential(
            headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.to_string()),
        )
    }

    /// The raw header value to forward, if any
    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }
}
