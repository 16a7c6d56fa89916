//! IYZWSv2 request authorization.
//!
//! The gateway authenticates a request by an HMAC-SHA256 over
//! `random_key + uri_path + body`, keyed with the merchant secret. The hex
//! digest travels inside a base64 `apiKey:..&randomKey:..&signature:..` string.

use crate::error::{IyzipayError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;

pub const AUTHORIZATION_SCHEME: &str = "IYZWSv2";
/// Header echoing the random key the signature was computed with.
pub const RANDOM_KEY_HEADER: &str = "x-iyzi-rnd";

type HmacSha256 = Hmac<Sha256>;

/// Per-request nonce: epoch milliseconds followed by eight random digits.
pub fn random_key() -> String {
    let suffix: u32 = rand::thread_rng().gen_range(10_000_000..100_000_000);
    format!("{}{}", Utc::now().timestamp_millis(), suffix)
}

pub fn signature(secret_key: &str, random_key: &str, uri_path: &str, body: &str) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .map_err(|e| IyzipayError::ConfigError(format!("Invalid secret key: {}", e)))?;
    mac.update(random_key.as_bytes());
    mac.update(uri_path.as_bytes());
    mac.update(body.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Full `Authorization` header value for one request.
pub fn authorization_header(
    api_key: &str,
    secret_key: &str,
    random_key: &str,
    uri_path: &str,
    body: &str,
) -> Result<String> {
    let signature = signature(secret_key, random_key, uri_path, body)?;
    let credentials = format!(
        "apiKey:{}&randomKey:{}&signature:{}",
        api_key, random_key, signature
    );
    Ok(format!(
        "{} {}",
        AUTHORIZATION_SCHEME,
        STANDARD.encode(credentials)
    ))
}
