//! HMAC-SHA256 request signing
//!
//! Signed endpoints take a `timestamp` parameter and a `signature`
//! computed over the query string that precedes it.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::form_urlencoded;

use crate::error::RestError;

type HmacSha256 = Hmac<Sha256>;

/// Signs request parameters with the account's API secret
#[derive(Clone)]
pub struct HmacSigner {
    mac: HmacSha256,
}

impl HmacSigner {
    pub fn new(api_secret: &str) -> Result<Self, RestError> {
        let mac = HmacSha256::new_from_slice(api_secret.as_bytes())
            .map_err(|e| RestError::Setup(format!("Invalid API secret: {}", e)))?;
        Ok(Self { mac })
    }

    /// Hex-encoded HMAC-SHA256 of `payload`
    pub fn signature(&self, payload: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Append `timestamp` and then `signature` to the parameters
    pub fn sign(&self, params: &mut Vec<(String, String)>, timestamp_ms: i64) {
        params.push(("timestamp".to_string(), timestamp_ms.to_string()));
        let signature = self.signature(&build_query_string(params));
        params.push(("signature".to_string(), signature));
    }
}

/// Form-encode parameters as `k1=v1&k2=v2`, preserving order
///
/// The signature covers exactly this string.
pub fn build_query_string(params: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}
