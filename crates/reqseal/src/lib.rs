//! Keyed-hash request signing and verification.
//!
//! This crate implements a shared-secret request authentication scheme:
//! given an HTTP method, a URI, and a parameter map, it reduces the request
//! to one deterministic canonical string, signs it with a keyed hash
//! (HMAC) under the credential's secret, and transports the base64 digest
//! in a small set of headers. The verifying side recomputes the signature
//! from the same request facts and compares in constant time, after
//! rejecting requests whose declared timestamp falls outside a configured
//! freshness window.
//!
//! # Overview
//!
//! Two cooperating pieces share one canonicalization routine:
//!
//! - [`Signer`] — builds the canonical string for a [`SigningContext`] and
//!   produces the tagged signature plus transport headers.
//! - [`Verifier`] — applies the freshness gate, recomputes, and compares.
//!
//! Both are stateless per request: the method, URI, timestamp, and
//! parameters travel in an immutable [`SigningContext`] value, so instances
//! can be shared across threads.
//!
//! # Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use reqseal::{Credential, SignatureConfig, Signer, SigningContext, Verifier};
//!
//! let credential = Credential::new("access-key-id", "access-key-secret").unwrap();
//! let config = SignatureConfig::default();
//!
//! // Client side: sign and produce transport headers.
//! let mut params = HashMap::new();
//! params.insert("perPage".to_owned(), serde_json::json!(20));
//! let ctx = SigningContext::new("GET", "/text", params);
//!
//! let signer = Signer::new(credential.clone(), config.clone()).unwrap();
//! let headers = signer.headers(&ctx, HashMap::new());
//!
//! // Server side: rebuild the context from the received request and verify.
//! let verifier = Verifier::new(credential, config).unwrap();
//! let verified = verifier.verify(&headers["Signature"], &ctx).unwrap();
//! assert!(verified);
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Deterministic canonical string construction
//! - [`config`] - Signing configuration and supported algorithms
//! - [`context`] - Immutable per-request signing context
//! - [`credentials`] - Shared-secret credential
//! - [`error`] - Configuration and verification error types
//! - [`sign`] - Signature and transport header production
//! - [`verify`] - Freshness gate and constant-time verification

pub mod canonical;
pub mod config;
pub mod context;
pub mod credentials;
pub mod error;
pub mod sign;
pub mod verify;

pub use config::{Algorithm, SignatureConfig};
pub use context::SigningContext;
pub use credentials::Credential;
pub use error::{ConfigError, VerifyError};
pub use sign::Signer;
pub use verify::Verifier;
