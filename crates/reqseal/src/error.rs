//! Error types for signing configuration and verification.
//!
//! Fatal configuration problems and recoverable verification outcomes are
//! kept apart: [`ConfigError`] is raised once, at construction or algorithm
//! selection time, while [`VerifyError`] covers the freshness rejection a
//! verifier can hit on every call. A signature mismatch is neither — it is
//! reported as a plain `Ok(false)` from `verify`.

/// Errors raised while constructing a signer, verifier, or algorithm.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The access key id is empty.
    #[error("access key id cannot be empty")]
    EmptyAccessKeyId,

    /// The access key secret is empty.
    #[error("access key secret cannot be empty")]
    EmptyAccessKeySecret,

    /// A required transport header name in the configuration is empty.
    #[error("header name for {0} cannot be empty")]
    EmptyHeaderName(&'static str),

    /// The requested keyed-hash algorithm is not supported.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

/// Errors raised during signature verification.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// The request timestamp falls outside the configured freshness window.
    ///
    /// Raised before any signature computation, so a replayed or badly
    /// skewed request learns nothing about signature matching.
    #[error("timestamp is {skew_secs}s from now, outside the {timeout_secs}s freshness window")]
    TimestampExpired {
        /// Absolute difference between the request timestamp and the
        /// verifier's clock, in seconds.
        skew_secs: i64,
        /// Configured freshness window, in seconds.
        timeout_secs: i64,
    },
}
