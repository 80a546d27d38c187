//! Canonical string construction.
//!
//! The canonical string is the single deterministic byte string fed to the
//! keyed-hash step. Its fixed assembly is:
//!
//! ```text
//! prefix + METHOD + connector
//!        + [VersionHeader=version + connector]     (only when version is set)
//!        + URI + connector
//!        + AccessKeyIdHeader=access_key_id + connector
//!        + TimestampHeader=timestamp
//!        + serialized-parameters
//!        + suffix
//! ```
//!
//! The serialized parameter block supplies its own leading connector, so no
//! connector is inserted after the timestamp segment, and the suffix is
//! appended with no separator. Deployed verifiers depend on this exact
//! joining, including the zero-parameter case — see
//! [`serialize_parameters`].

use std::collections::HashMap;

use serde_json::Value;

use crate::config::SignatureConfig;
use crate::context::SigningContext;

/// Serialize the request parameters for the canonical string.
///
/// Entries whose value is not a string, number, or boolean are dropped
/// (a lossy filter, not an error). Surviving entries are sorted by key in
/// ascending byte order and rendered as `key=value`, with keys and string
/// values form-urlencoded, numbers in their canonical textual form, and
/// booleans as the literal tokens `true`/`false`.
///
/// Boundary behavior, kept bit-compatible with deployed verifiers: an empty
/// map serializes to the connector itself, while a non-empty map whose
/// entries were all filtered out serializes to the empty string. Otherwise
/// the result is the connector followed by the pairs joined by the
/// connector.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use reqseal::canonical::serialize_parameters;
///
/// let mut params = HashMap::new();
/// params.insert("b".to_owned(), serde_json::json!("2"));
/// params.insert("a".to_owned(), serde_json::json!(1));
/// assert_eq!(serialize_parameters(&params, "&"), "&a=1&b=2");
///
/// assert_eq!(serialize_parameters(&HashMap::new(), "&"), "&");
/// ```
#[must_use]
pub fn serialize_parameters(parameters: &HashMap<String, Value>, connector: &str) -> String {
    if parameters.is_empty() {
        return connector.to_owned();
    }

    let mut entries: Vec<(&str, String)> = parameters
        .iter()
        .filter_map(|(key, value)| render_scalar(value).map(|rendered| (key.as_str(), rendered)))
        .collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    if entries.is_empty() {
        return String::new();
    }

    let pairs: Vec<String> = entries
        .iter()
        .map(|(key, value)| format!("{}={value}", url_encode(key)))
        .collect();

    let mut serialized = connector.to_owned();
    serialized.push_str(&pairs.join(connector));
    serialized
}

/// Build the full string to sign for a request.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use reqseal::canonical::build_string_to_sign;
/// use reqseal::config::SignatureConfig;
/// use reqseal::context::SigningContext;
///
/// let ctx = SigningContext::with_timestamp("GET", "/text", HashMap::new(), 1600659800);
/// let string_to_sign = build_string_to_sign(&ctx, "access-key-id", &SignatureConfig::default());
/// assert_eq!(
///     string_to_sign,
///     "GET&/text&Access-Key-Id=access-key-id&Timestamp=1600659800&"
/// );
/// ```
#[must_use]
pub fn build_string_to_sign(
    ctx: &SigningContext,
    access_key_id: &str,
    config: &SignatureConfig,
) -> String {
    let connector = &config.connector;
    let parameters = serialize_parameters(&ctx.parameters, connector);

    let version_segment = config
        .version
        .as_deref()
        .filter(|version| !version.is_empty())
        .map(|version| format!("{}={version}{connector}", config.header_version))
        .unwrap_or_default();

    format!(
        "{prefix}{method}{connector}{version_segment}{uri}{connector}\
         {akid_header}={access_key_id}{connector}{ts_header}={timestamp}{parameters}{suffix}",
        prefix = config.prefix,
        method = ctx.method,
        uri = ctx.uri,
        akid_header = config.header_access_key_id,
        ts_header = config.header_timestamp,
        timestamp = ctx.timestamp,
        suffix = config.suffix,
    )
}

/// Render a scalar parameter value, or `None` for values excluded from
/// signing (null, arrays, objects).
fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(url_encode(s)),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "true" } else { "false" }.to_owned()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Percent-encode a key or string value using www-form-urlencoded rules
/// (space becomes `+`).
fn url_encode(input: &str) -> String {
    form_urlencoded::byte_serialize(input.as_bytes()).collect()
}
