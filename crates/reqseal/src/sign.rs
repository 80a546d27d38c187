//! Request signing.
//!
//! [`Signer`] turns a [`SigningContext`] into a transportable signature:
//! canonical string, then keyed hash under the credential's secret, then
//! base64, then the optional tag prefix. It also produces the four transport
//! headers a signed request carries.

use std::collections::HashMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::debug;

use crate::canonical::build_string_to_sign;
use crate::config::SignatureConfig;
use crate::context::SigningContext;
use crate::credentials::Credential;
use crate::error::ConfigError;

/// Signs requests with a shared-secret credential.
///
/// A signer holds only the credential and configuration; per-request state
/// lives in the [`SigningContext`] value, so one instance can be shared
/// across threads and reused for any number of requests.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use reqseal::config::SignatureConfig;
/// use reqseal::context::SigningContext;
/// use reqseal::credentials::Credential;
/// use reqseal::sign::Signer;
///
/// let credential = Credential::new("access-key-id", "access-key-secret").unwrap();
/// let signer = Signer::new(credential, SignatureConfig::default()).unwrap();
///
/// let mut params = HashMap::new();
/// params.insert("perPage".to_owned(), serde_json::json!(20));
/// let ctx = SigningContext::with_timestamp("GET", "/text", params, 1600659800);
///
/// assert_eq!(signer.sign(&ctx), "Signature TN4kbBUDK7km3B0qjXrHhrtek4Q=");
/// ```
#[derive(Debug, Clone)]
pub struct Signer {
    credential: Credential,
    config: SignatureConfig,
}

impl Signer {
    /// Create a signer, validating the configuration eagerly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyHeaderName`] if any required transport
    /// header name is empty.
    pub fn new(credential: Credential, config: SignatureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { credential, config })
    }

    /// Compute the tagged signature for a request.
    #[must_use]
    pub fn sign(&self, ctx: &SigningContext) -> String {
        let string_to_sign =
            build_string_to_sign(ctx, self.credential.access_key_id(), &self.config);

        debug!(string_to_sign, "Built string to sign");

        let digest = self.config.algorithm.hmac(
            self.credential.access_key_secret().as_bytes(),
            string_to_sign.as_bytes(),
        );

        self.tagged(&BASE64.encode(digest))
    }

    /// Merge the signature transport headers into `headers`.
    ///
    /// Inserts four entries under the configured header names: the raw
    /// access key id, the decimal timestamp, the tagged signature, and the
    /// version string (empty when no version is configured). Existing
    /// entries under those names are overwritten.
    #[must_use]
    pub fn headers(
        &self,
        ctx: &SigningContext,
        mut headers: HashMap<String, String>,
    ) -> HashMap<String, String> {
        headers.insert(
            self.config.header_access_key_id.clone(),
            self.credential.access_key_id().to_owned(),
        );
        headers.insert(self.config.header_timestamp.clone(), ctx.timestamp.to_string());
        headers.insert(self.config.header_signature.clone(), self.sign(ctx));
        headers.insert(
            self.config.header_version.clone(),
            self.config.version.clone().unwrap_or_default(),
        );
        headers
    }

    /// Apply the configured tag prefix to an encoded digest.
    fn tagged(&self, digest: &str) -> String {
        if self.config.signature_tag.is_empty() {
            digest.to_owned()
        } else {
            format!("{} {digest}", self.config.signature_tag)
        }
    }

    pub(crate) fn config(&self) -> &SignatureConfig {
        &self.config
    }
}
