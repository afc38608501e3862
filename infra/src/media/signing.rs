//! Request signing for the Cloudinary upload API
//!
//! The signature is a hex digest over the request parameters sorted by
//! name, serialized as `k=v` pairs joined with `&`, with the API secret
//! appended. `file`, `api_key`, `resource_type` and the signature fields
//! are never signed.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Value of the `signature_algorithm` parameter sent with signed requests
pub const SIGNATURE_ALGORITHM: &str = "sha256";

const UNSIGNED_PARAMS: [&str; 5] = [
    "file",
    "api_key",
    "resource_type",
    "signature",
    "signature_algorithm",
];

/// String that gets hashed, exposed for diagnostics
pub fn string_to_sign(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .filter(|(key, value)| !UNSIGNED_PARAMS.contains(&key.as_str()) && !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Sign `params` with `api_secret`
pub fn sign(params: &BTreeMap<String, String>, api_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(string_to_sign(params).as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}
