//! Structural decoding of the stored access token.
//!
//! The token is a dot-separated credential whose second segment is a
//! base64url encoded JSON object. Only the payload is read: the signature is
//! never checked and `exp` is never compared against a clock, so a decoded
//! [`Claims`] says what the token *claims*, not that it is still valid.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Deserializer, Serialize};

/// `localStorage` key the site keeps the access token under.
pub const TOKEN_STORAGE_KEY: &str = "ga6";

/// Accepts base64url with or without trailing `=` padding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Error returned by [`decode_claims`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The token string was empty or whitespace.
    #[error("token is empty")]
    Empty,
    /// The token has no second (payload) segment.
    #[error("token has no payload segment")]
    MissingPayload,
    /// The payload segment is not valid base64url.
    #[error("invalid base64url payload: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The payload is valid base64 but not a JSON object.
    #[error("payload is not a JSON object")]
    NotAnObject,
    /// The payload JSON does not match the claims shape (e.g. missing `role`).
    #[error("invalid claims payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Claims carried in the token payload.
///
/// `role` is the only field the guards consult. Unknown payload fields are
/// ignored, and `sub`/`email` never fail the decode: numbers are read as
/// their decimal text, any other non-string becomes `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Role name, e.g. `"admin"` or `"user"`.
    pub role: String,
    /// Subject (user id), if present.
    #[serde(default, deserialize_with = "lenient_string")]
    pub sub: Option<String>,
    /// Email address, if present.
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
}

impl Claims {
    /// Role as a guard sees it; an empty role counts as no role.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        Some(self.role.as_str()).filter(|r| !r.is_empty())
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Decode the payload segment of `token` into [`Claims`].
///
/// # Errors
///
/// Returns a [`DecodeError`] when the token is empty, has no payload segment,
/// or its payload is not a base64url JSON object with a string `role`.
pub fn decode_claims(token: &str) -> Result<Claims, DecodeError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }

    let payload = token.split('.').nth(1).ok_or(DecodeError::MissingPayload)?;
    if payload.is_empty() {
        return Err(DecodeError::MissingPayload);
    }

    // Tolerate the standard alphabet as well; some issuers emit `+` and `/`.
    let normalized = payload.replace('+', "-").replace('/', "_");
    let bytes = PAYLOAD_ENGINE.decode(normalized)?;

    let value: serde_json::Value = serde_json::from_slice(&bytes)?;
    if !value.is_object() {
        return Err(DecodeError::NotAnObject);
    }
    Ok(Claims::deserialize(value)?)
}

/// Decode boundary used by the guards: any failure collapses to `None`.
///
/// A missing token and a malformed one are indistinguishable to the caller,
/// which keeps role checks fail-closed.
#[must_use]
pub fn role_from_token(token: Option<&str>) -> Option<String> {
    let claims = decode_claims(token?).ok()?;
    claims.role().map(str::to_owned)
}
