use serde::de::DeserializeOwned;

use crate::{Error, Result};

pub fn to_base64(decoded: impl AsRef<[u8]>) -> String {
    base64_url::encode(decoded.as_ref())
}

/// Decodes base64url text received from the wire.
/// Failures are reported as [`Error::Malformed`] since the input is untrusted.
pub fn from_base64(encoded: &str) -> Result<Vec<u8>> {
    base64_url::decode(encoded)
        .map_err(|e| Error::Malformed(format!("invalid base64url value: {}", e)))
}

/// Decodes base64url text and parses the result as JSON.
pub fn from_base64_json<T: DeserializeOwned>(encoded: &str) -> Result<T> {
    let decoded = from_base64(encoded)?;
    serde_json::from_slice(&decoded)
        .map_err(|e| Error::Malformed(format!("invalid base64url encoded JSON: {}", e)))
}
