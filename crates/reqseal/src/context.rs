//! Immutable per-request signing context.
//!
//! A [`SigningContext`] carries the request facts one signature covers:
//! method, URI, unix timestamp, and the parameter map. It is constructed per
//! signing or verification call and threaded explicitly through the API, so
//! signers and verifiers hold no per-request state and can be shared across
//! threads.

use std::collections::HashMap;

use chrono::Utc;
use serde_json::Value;

/// The request facts covered by one signature.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use reqseal::context::SigningContext;
///
/// let ctx = SigningContext::with_timestamp("GET", "/text", HashMap::new(), 1600659800);
/// assert_eq!(ctx.method, "GET");
/// assert_eq!(ctx.timestamp, 1600659800);
/// ```
#[derive(Debug, Clone)]
pub struct SigningContext {
    /// HTTP method, e.g. `"GET"`.
    pub method: String,
    /// Request URI, e.g. `"/text"`.
    pub uri: String,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    /// Request parameters. Values that are not a string, number, or boolean
    /// are excluded from the canonical string.
    pub parameters: HashMap<String, Value>,
}

impl SigningContext {
    /// Create a context stamped with the current wall-clock time.
    #[must_use]
    pub fn new(
        method: impl Into<String>,
        uri: impl Into<String>,
        parameters: HashMap<String, Value>,
    ) -> Self {
        Self::with_timestamp(method, uri, parameters, Utc::now().timestamp())
    }

    /// Create a context with an explicit timestamp, as received from a
    /// request's transport headers on the verifying side.
    #[must_use]
    pub fn with_timestamp(
        method: impl Into<String>,
        uri: impl Into<String>,
        parameters: HashMap<String, Value>,
        timestamp: i64,
    ) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            timestamp,
            parameters,
        }
    }
}
