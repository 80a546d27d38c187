//! Signing configuration and supported keyed-hash algorithms.
//!
//! [`SignatureConfig`] collects every knob of the signing scheme: the hash
//! algorithm, the freshness window, the canonical-string framing (prefix,
//! connector, suffix), and the transport header names. A configuration is
//! built once, validated eagerly by [`Signer::new`] or [`Verifier::new`],
//! and never mutated during a signing or verification operation.
//!
//! [`Signer::new`]: crate::sign::Signer::new
//! [`Verifier::new`]: crate::verify::Verifier::new

use std::fmt;
use std::str::FromStr;

use hmac::{Hmac, KeyInit, Mac};
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use typed_builder::TypedBuilder;

use crate::error::ConfigError;

type HmacMd5 = Hmac<Md5>;
type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

/// Keyed-hash algorithms supported for signature computation.
///
/// Selection happens at configuration time; an unrecognized name fails
/// [`Algorithm::from_str`] with a fatal [`ConfigError`], never a per-call
/// error.
///
/// # Examples
///
/// ```
/// use reqseal::config::Algorithm;
///
/// let algo: Algorithm = "sha256".parse().unwrap();
/// assert_eq!(algo, Algorithm::Sha256);
/// assert_eq!(algo.to_string(), "sha256");
/// assert!("sha3".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// HMAC-MD5. Kept for interoperability with legacy deployments.
    Md5,
    /// HMAC-SHA1, the default.
    #[default]
    Sha1,
    /// HMAC-SHA256.
    Sha256,
    /// HMAC-SHA512.
    Sha512,
}

impl Algorithm {
    /// Compute the raw keyed-hash digest of `message` under `key`.
    #[must_use]
    pub fn hmac(self, key: &[u8], message: &[u8]) -> Vec<u8> {
        match self {
            Self::Md5 => {
                let mut mac =
                    HmacMd5::new_from_slice(key).expect("HMAC can accept any key length");
                mac.update(message);
                mac.finalize().into_bytes().to_vec()
            }
            Self::Sha1 => {
                let mut mac =
                    HmacSha1::new_from_slice(key).expect("HMAC can accept any key length");
                mac.update(message);
                mac.finalize().into_bytes().to_vec()
            }
            Self::Sha256 => {
                let mut mac =
                    HmacSha256::new_from_slice(key).expect("HMAC can accept any key length");
                mac.update(message);
                mac.finalize().into_bytes().to_vec()
            }
            Self::Sha512 => {
                let mut mac =
                    HmacSha512::new_from_slice(key).expect("HMAC can accept any key length");
                mac.update(message);
                mac.finalize().into_bytes().to_vec()
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md5" => Ok(Self::Md5),
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            other => Err(ConfigError::UnsupportedAlgorithm(other.to_owned())),
        }
    }
}

/// Signing scheme configuration.
///
/// All fields have defaults matching the deployed scheme. The three required
/// header names must be non-empty; [`SignatureConfig::validate`] enforces
/// that and is called eagerly on signer/verifier construction.
///
/// # Examples
///
/// ```
/// use reqseal::config::{Algorithm, SignatureConfig};
///
/// let config = SignatureConfig::default();
/// assert_eq!(config.algorithm, Algorithm::Sha1);
/// assert_eq!(config.connector, "&");
/// assert_eq!(config.header_access_key_id, "Access-Key-Id");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct SignatureConfig {
    /// Keyed-hash algorithm used for the signature.
    #[builder(default = Algorithm::Sha1)]
    pub algorithm: Algorithm,

    /// Freshness window in seconds; a request whose timestamp is further
    /// than this from the verifier's clock is rejected before comparison.
    #[builder(default = 300)]
    pub timeout_secs: i64,

    /// API version covered by the signature, included in the canonical
    /// string only when non-empty.
    #[builder(default)]
    pub version: Option<String>,

    /// Literal prepended to the canonical string.
    #[builder(default = String::new())]
    pub prefix: String,

    /// Separator between canonical string segments.
    #[builder(default = String::from("&"))]
    pub connector: String,

    /// Literal appended to the canonical string, with no separator.
    #[builder(default = String::new())]
    pub suffix: String,

    /// Transport header carrying the access key id.
    #[builder(default = String::from("Access-Key-Id"))]
    pub header_access_key_id: String,

    /// Transport header carrying the request timestamp.
    #[builder(default = String::from("Timestamp"))]
    pub header_timestamp: String,

    /// Transport header carrying the signature.
    #[builder(default = String::from("Signature"))]
    pub header_signature: String,

    /// Tag prepended to the encoded digest (`"<tag> <digest>"`); an empty
    /// tag transports the bare digest.
    #[builder(default = String::from("Signature"))]
    pub signature_tag: String,

    /// Transport header carrying the API version.
    #[builder(default = String::from("Version"))]
    pub header_version: String,

    /// When enabled, verification always succeeds without comparing
    /// anything. Local development only.
    #[builder(default = false)]
    pub debug: bool,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Sha1,
            timeout_secs: 300,
            version: None,
            prefix: String::new(),
            connector: String::from("&"),
            suffix: String::new(),
            header_access_key_id: String::from("Access-Key-Id"),
            header_timestamp: String::from("Timestamp"),
            header_signature: String::from("Signature"),
            signature_tag: String::from("Signature"),
            header_version: String::from("Version"),
            debug: false,
        }
    }
}

impl SignatureConfig {
    /// Check that every required header name is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyHeaderName`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.header_access_key_id.is_empty() {
            return Err(ConfigError::EmptyHeaderName("access key id"));
        }
        if self.header_timestamp.is_empty() {
            return Err(ConfigError::EmptyHeaderName("timestamp"));
        }
        if self.header_signature.is_empty() {
            return Err(ConfigError::EmptyHeaderName("signature"));
        }
        Ok(())
    }
}
