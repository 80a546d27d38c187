//! Shared-secret credential for signing and verification.

use crate::error::ConfigError;

/// An access key id / access key secret pair.
///
/// Both fields are required non-empty and immutable once constructed. The
/// secret never leaves the crate; only the access key id is exposed, since
/// it travels in the transport headers.
///
/// # Examples
///
/// ```
/// use reqseal::credentials::Credential;
///
/// let credential = Credential::new("access-key-id", "access-key-secret").unwrap();
/// assert_eq!(credential.access_key_id(), "access-key-id");
/// assert!(Credential::new("", "secret").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Credential {
    access_key_id: String,
    access_key_secret: String,
}

impl Credential {
    /// Create a credential from an access key id and secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessKeyId`] or
    /// [`ConfigError::EmptyAccessKeySecret`] if either field is empty.
    pub fn new(
        access_key_id: impl Into<String>,
        access_key_secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let access_key_id = access_key_id.into();
        let access_key_secret = access_key_secret.into();

        if access_key_id.is_empty() {
            return Err(ConfigError::EmptyAccessKeyId);
        }
        if access_key_secret.is_empty() {
            return Err(ConfigError::EmptyAccessKeySecret);
        }

        Ok(Self {
            access_key_id,
            access_key_secret,
        })
    }

    /// The public half of the credential.
    #[must_use]
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub(crate) fn access_key_secret(&self) -> &str {
        &self.access_key_secret
    }
}
