// SPDX-License-Identifier: MIT

//! Signature verification for svix-delivered Clerk webhooks.
//!
//! The svix scheme: the secret is `whsec_<base64 key>`; the signed content
//! is `"{id}.{timestamp}.{body}"` keyed with the decoded secret via
//! HMAC-SHA256; the `svix-signature` header carries space-separated
//! `v1,<base64 signature>` entries and any single match verifies.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Accept signed timestamps within five minutes of local time.
const TIMESTAMP_TOLERANCE_SECS: i64 = 5 * 60;

/// Webhook verification failure. `BadSecret` is a deployment problem on
/// our side; the other variants indicate an unauthentic request. In every
/// case the event must not be processed.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("invalid webhook secret")]
    BadSecret,
    #[error("webhook timestamp outside tolerance")]
    BadTimestamp,
    #[error("webhook signature mismatch")]
    SignatureMismatch,
}

/// Verify a svix signature header against the raw request body.
pub fn verify_signature(
    secret: &str,
    id: &str,
    timestamp: &str,
    signature_header: &str,
    body: &[u8],
) -> Result<(), VerifyError> {
    let key = decode_secret(secret)?;
    check_timestamp(timestamp)?;

    let mut mac = HmacSha256::new_from_slice(&key).map_err(|_| VerifyError::BadSecret)?;
    mac.update(id.as_bytes());
    mac.update(b".");
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(body);
    let expected = mac.finalize().into_bytes();

    for entry in signature_header.split_whitespace() {
        let Some(encoded) = entry.strip_prefix("v1,") else {
            continue;
        };
        let Ok(candidate) = STANDARD.decode(encoded) else {
            continue;
        };
        if bool::from(candidate.as_slice().ct_eq(expected.as_slice())) {
            return Ok(());
        }
    }

    Err(VerifyError::SignatureMismatch)
}

fn decode_secret(secret: &str) -> Result<Vec<u8>, VerifyError> {
    let encoded = secret.strip_prefix("whsec_").unwrap_or(secret);
    STANDARD.decode(encoded).map_err(|_| VerifyError::BadSecret)
}

fn check_timestamp(timestamp: &str) -> Result<(), VerifyError> {
    let signed_at: i64 = timestamp.parse().map_err(|_| VerifyError::BadTimestamp)?;
    let now = chrono::Utc::now().timestamp();
    if (now - signed_at).abs() > TIMESTAMP_TOLERANCE_SECS {
        return Err(VerifyError::BadTimestamp);
    }
    Ok(())
}
