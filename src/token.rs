//! HS256 JSON Web Tokens
//!
//! Header and claims are compact JSON, base64url encoded without padding.
//! The signature is HMAC-SHA256 over `header.claims`.

use crate::error::CollaboratorError;
use crate::runtime::TokenSigner;
use crate::state_machine::{Payload, Secret};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64URL, Engine};
use serde::Serialize;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Serialize)]
struct Header {
    alg: &'static str,
}

const HS256: Header = Header { alg: "HS256" };

/// Production signer
#[derive(Debug, Clone, Copy, Default)]
pub struct Hs256Signer;

impl TokenSigner for Hs256Signer {
    fn sign(&self, payload: &Payload, secret: &Secret) -> Result<String, CollaboratorError> {
        encode(payload, secret.expose())
    }
}

/// Encode any serializable claims as a signed token
pub fn encode<T: Serialize + ?Sized>(claims: &T, secret: &[u8]) -> Result<String, CollaboratorError> {
    let header = serde_json::to_vec(&HS256)
        .map_err(|e| CollaboratorError::new(format!("Failed to serialize header: {e}")))?;
    let claims = serde_json::to_vec(claims)
        .map_err(|e| CollaboratorError::new(format!("Failed to serialize claims: {e}")))?;

    let signing_input = format!("{}.{}", BASE64URL.encode(header), BASE64URL.encode(claims));
    let signature = hmac_sha256(secret, signing_input.as_bytes())?;

    Ok(format!("{signing_input}.{}", BASE64URL.encode(signature)))
}

/// HMAC (RFC 2104) over SHA-256
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<[u8; 32], CollaboratorError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| CollaboratorError::new(format!("Invalid signing key: {e}")))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().into())
}

/// Check the signature and return the decoded claims
#[cfg(test)]
pub(crate) fn verify(token: &str, secret: &[u8]) -> Result<serde_json::Value, String> {
    let mut parts = token.split('.');
    let (Some(header), Some(claims), Some(signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected three segments in {token:?}"));
    };

    let expected = hmac_sha256(secret, format!("{header}.{claims}").as_bytes())
        .map_err(|e| e.to_string())?;
    let signature = BASE64URL.decode(signature).map_err(|e| e.to_string())?;
    if signature != expected {
        return Err("signature mismatch".to_string());
    }

    let header: serde_json::Value =
        serde_json::from_slice(&BASE64URL.decode(header).map_err(|e| e.to_string())?)
            .map_err(|e| e.to_string())?;
    if header != serde_json::json!({ "alg": "HS256" }) {
        return Err(format!("unexpected header {header}"));
    }

    serde_json::from_slice(&BASE64URL.decode(claims).map_err(|e| e.to_string())?)
        .map_err(|e| e.to_string())
}
