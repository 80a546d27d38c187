//! Signature verification.
//!
//! [`Verifier`] recomputes the expected signature for a request and compares
//! it to the supplied one. Each call is a single deterministic pass:
//!
//! 1. Debug bypass — when `debug` is configured, accept without computing
//!    anything.
//! 2. Freshness gate — a timestamp outside the configured window fails with
//!    [`VerifyError::TimestampExpired`] before any signature work, so a
//!    stale request learns nothing about signature matching.
//! 3. Recompute and compare in constant time. A mismatch is an expected
//!    outcome of untrusted input and is reported as `Ok(false)`.

use chrono::Utc;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::config::SignatureConfig;
use crate::context::SigningContext;
use crate::credentials::Credential;
use crate::error::{ConfigError, VerifyError};
use crate::sign::Signer;

/// Verifies request signatures against a shared-secret credential.
///
/// Like [`Signer`], a verifier holds only credential and configuration; the
/// request facts arrive per call in a [`SigningContext`] whose timestamp is
/// the one the client declared in its transport headers.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use reqseal::config::SignatureConfig;
/// use reqseal::context::SigningContext;
/// use reqseal::credentials::Credential;
/// use reqseal::sign::Signer;
/// use reqseal::verify::Verifier;
///
/// let credential = Credential::new("access-key-id", "access-key-secret").unwrap();
/// let config = SignatureConfig::default();
///
/// let ctx = SigningContext::new("GET", "/text", HashMap::new());
/// let signature = Signer::new(credential.clone(), config.clone()).unwrap().sign(&ctx);
///
/// let verifier = Verifier::new(credential, config).unwrap();
/// assert!(verifier.verify(&signature, &ctx).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Verifier {
    signer: Signer,
}

impl Verifier {
    /// Create a verifier, validating the configuration eagerly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyHeaderName`] if any required transport
    /// header name is empty.
    pub fn new(credential: Credential, config: SignatureConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            signer: Signer::new(credential, config)?,
        })
    }

    /// Verify a supplied signature against the request facts in `ctx`.
    ///
    /// The supplied signature must carry the configured tag; both sides
    /// compare the full tagged form.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::TimestampExpired`] when the context timestamp
    /// is outside the freshness window. A signature mismatch is `Ok(false)`,
    /// not an error.
    pub fn verify(&self, signature: &str, ctx: &SigningContext) -> Result<bool, VerifyError> {
        let config = self.config();

        if config.debug {
            debug!("Debug mode enabled, accepting without verification");
            return Ok(true);
        }

        let skew_secs = (ctx.timestamp - Utc::now().timestamp()).abs();
        if skew_secs > config.timeout_secs {
            debug!(
                timestamp = ctx.timestamp,
                skew_secs, "Timestamp outside freshness window"
            );
            return Err(VerifyError::TimestampExpired {
                skew_secs,
                timeout_secs: config.timeout_secs,
            });
        }

        let expected = self.signer.sign(ctx);
        let matched: bool = signature.as_bytes().ct_eq(expected.as_bytes()).into();

        if matched {
            debug!("Signature verification succeeded");
        } else {
            debug!(expected = %expected, provided = %signature, "Signature mismatch");
        }

        Ok(matched)
    }

    /// Whether `timestamp` falls inside the configured freshness window.
    ///
    /// A timestamp exactly `timeout_secs` from now is still fresh; rejection
    /// is strictly beyond the window.
    #[must_use]
    pub fn is_fresh(&self, timestamp: i64) -> bool {
        (timestamp - Utc::now().timestamp()).abs() <= self.config().timeout_secs
    }

    fn config(&self) -> &SignatureConfig {
        self.signer.config()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;

    const TEST_ACCESS_KEY_ID: &str = "access-key-id";
    const TEST_ACCESS_KEY_SECRET: &str = "access-key-secret";

    fn test_credential() -> Credential {
        Credential::new(TEST_ACCESS_KEY_ID, TEST_ACCESS_KEY_SECRET).unwrap()
    }

    fn test_pair(config: &SignatureConfig) -> (Signer, Verifier) {
        let signer = Signer::new(test_credential(), config.clone()).unwrap();
        let verifier = Verifier::new(test_credential(), config.clone()).unwrap();
        (signer, verifier)
    }

    fn fresh_context() -> SigningContext {
        let mut params = HashMap::new();
        params.insert("perPage".to_owned(), json!(20));
        SigningContext::new("GET", "/text", params)
    }

    #[test]
    fn test_should_verify_round_trip() {
        let (signer, verifier) = test_pair(&SignatureConfig::default());
        let ctx = fresh_context();
        let signature = signer.sign(&ctx);
        assert!(verifier.verify(&signature, &ctx).unwrap());
    }

    #[test]
    fn test_should_reject_tampered_request() {
        let (signer, verifier) = test_pair(&SignatureConfig::default());
        let ctx = fresh_context();
        let signature = signer.sign(&ctx);

        let mut tampered = ctx.clone();
        tampered
            .parameters
            .insert("perPage".to_owned(), json!(21));
        assert!(!verifier.verify(&signature, &tampered).unwrap());

        let mut tampered = ctx.clone();
        tampered.method = "DELETE".to_owned();
        assert!(!verifier.verify(&signature, &tampered).unwrap());

        let mut tampered = ctx;
        tampered.uri = "/texts".to_owned();
        assert!(!verifier.verify(&signature, &tampered).unwrap());
    }

    #[test]
    fn test_should_reject_forged_signature() {
        let (_, verifier) = test_pair(&SignatureConfig::default());
        let ctx = fresh_context();
        assert!(!verifier.verify("Signature AAAAAAAAAAAAAAAAAAAAAAAAAAA=", &ctx).unwrap());
    }

    #[test]
    fn test_should_reject_untagged_signature_when_tag_configured() {
        let (signer, verifier) = test_pair(&SignatureConfig::default());
        let ctx = fresh_context();
        let tagged = signer.sign(&ctx);
        let bare = tagged.strip_prefix("Signature ").unwrap();
        assert!(!verifier.verify(bare, &ctx).unwrap());
    }

    #[test]
    fn test_should_reject_expired_timestamp() {
        let config = SignatureConfig::default();
        let (signer, verifier) = test_pair(&config);

        let mut ctx = fresh_context();
        ctx.timestamp -= config.timeout_secs + 100;
        let signature = signer.sign(&ctx);

        let result = verifier.verify(&signature, &ctx);
        assert!(matches!(
            result,
            Err(VerifyError::TimestampExpired { timeout_secs: 300, .. })
        ));
    }

    #[test]
    fn test_should_reject_future_timestamp_beyond_window() {
        let (signer, verifier) = test_pair(&SignatureConfig::default());

        let mut ctx = fresh_context();
        ctx.timestamp += 1000;
        let signature = signer.sign(&ctx);

        assert!(matches!(
            verifier.verify(&signature, &ctx),
            Err(VerifyError::TimestampExpired { .. })
        ));
    }

    #[test]
    fn test_should_accept_timestamp_inside_window() {
        let config = SignatureConfig::builder().timeout_secs(3600).build();
        let (signer, verifier) = test_pair(&config);

        // Well inside the window but far from "now", so the freshness gate
        // is exercised rather than skipped.
        let mut ctx = fresh_context();
        ctx.timestamp -= 3500;
        let signature = signer.sign(&ctx);

        assert!(verifier.verify(&signature, &ctx).unwrap());
    }

    #[test]
    fn test_should_treat_window_edge_as_fresh() {
        let config = SignatureConfig::builder().timeout_secs(3600).build();
        let (_, verifier) = test_pair(&config);
        let now = Utc::now().timestamp();

        // Strictly-greater rejection: the edge is fresh, one step beyond
        // (with slack for the clock ticking mid-test) is not.
        assert!(verifier.is_fresh(now - 3598));
        assert!(!verifier.is_fresh(now - 3605));
    }

    #[test]
    fn test_should_bypass_verification_in_debug_mode() {
        let config = SignatureConfig::builder().debug(true).build();
        let (_, verifier) = test_pair(&config);

        let mut ctx = fresh_context();
        ctx.timestamp -= 10_000;
        assert!(verifier.verify("not even a signature", &ctx).unwrap());
    }
}
