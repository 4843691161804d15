use base64::engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD};

use super::*;

fn token_with_payload(payload: &str) -> String {
    format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", URL_SAFE_NO_PAD.encode(payload))
}

// =============================================================================
// decode_claims
// =============================================================================

#[test]
fn decode_claims_reads_role_and_optional_fields() {
    let token = token_with_payload(r#"{"role":"admin","sub":"u-1","email":"a@okami.dev","exp":1}"#);
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.role, "admin");
    assert_eq!(claims.sub.as_deref(), Some("u-1"));
    assert_eq!(claims.email.as_deref(), Some("a@okami.dev"));
}

#[test]
fn decode_claims_optional_fields_default_to_none() {
    let claims = decode_claims(&token_with_payload(r#"{"role":"user"}"#)).unwrap();
    assert_eq!(claims.sub, None);
    assert_eq!(claims.email, None);
}

#[test]
fn decode_claims_accepts_padded_payload() {
    let token = format!("h.{}.s", URL_SAFE.encode(r#"{"role":"admin"}"#));
    assert!(token.contains('='));
    assert_eq!(decode_claims(&token).unwrap().role, "admin");
}

#[test]
fn decode_claims_accepts_standard_alphabet() {
    let payload = r#"{"role":"user","note":">>>?"}"#;
    let token = format!("h.{}.s", STANDARD.encode(payload));
    assert_eq!(decode_claims(&token).unwrap().role, "user");
}

#[test]
fn decode_claims_accepts_two_segment_token() {
    let token = format!("h.{}", URL_SAFE_NO_PAD.encode(r#"{"role":"user"}"#));
    assert_eq!(decode_claims(&token).unwrap().role, "user");
}

#[test]
fn decode_claims_empty_token_is_error() {
    assert!(matches!(decode_claims(""), Err(DecodeError::Empty)));
    assert!(matches!(decode_claims("   "), Err(DecodeError::Empty)));
}

#[test]
fn decode_claims_without_payload_segment_is_error() {
    assert!(matches!(decode_claims("not-a-jwt"), Err(DecodeError::MissingPayload)));
    assert!(matches!(decode_claims("header..sig"), Err(DecodeError::MissingPayload)));
}

#[test]
fn decode_claims_invalid_base64_is_error() {
    assert!(matches!(decode_claims("h.!!!!.s"), Err(DecodeError::Base64(_))));
}

#[test]
fn decode_claims_non_json_payload_is_error() {
    let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("hello"));
    assert!(matches!(decode_claims(&token), Err(DecodeError::Json(_))));
}

#[test]
fn decode_claims_non_object_payload_is_error() {
    assert!(matches!(
        decode_claims(&token_with_payload(r#"["admin"]"#)),
        Err(DecodeError::NotAnObject)
    ));
    assert!(matches!(decode_claims(&token_with_payload("42")), Err(DecodeError::NotAnObject)));
}

#[test]
fn decode_claims_missing_role_is_error() {
    assert!(matches!(
        decode_claims(&token_with_payload(r#"{"sub":"u-1"}"#)),
        Err(DecodeError::Json(_))
    ));
}

#[test]
fn decode_claims_numeric_sub_keeps_role() {
    let token = token_with_payload(r#"{"role":"admin","sub":12345}"#);
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.role(), Some("admin"));
    assert_eq!(claims.sub.as_deref(), Some("12345"));
}

#[test]
fn decode_claims_non_string_email_is_dropped() {
    let token = token_with_payload(r#"{"role":"user","email":["a@okami.dev"],"sub":{"id":1}}"#);
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.role(), Some("user"));
    assert_eq!(claims.email, None);
    assert_eq!(claims.sub, None);
}

#[test]
fn decode_claims_null_optional_fields_are_none() {
    let token = token_with_payload(r#"{"role":"user","sub":null,"email":false}"#);
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.sub, None);
    assert_eq!(claims.email, None);
}

#[test]
fn decode_claims_non_string_role_is_error() {
    assert!(matches!(
        decode_claims(&token_with_payload(r#"{"role":7}"#)),
        Err(DecodeError::Json(_))
    ));
}

// =============================================================================
// role_from_token
// =============================================================================

#[test]
fn role_from_token_returns_role() {
    let token = token_with_payload(r#"{"role":"admin"}"#);
    assert_eq!(role_from_token(Some(token.as_str())), Some("admin".to_owned()));
}

#[test]
fn role_from_token_ignores_odd_typed_fields() {
    let token = token_with_payload(r#"{"role":"admin","sub":12345,"email":7}"#);
    assert_eq!(role_from_token(Some(token.as_str())), Some("admin".to_owned()));
}

#[test]
fn role_from_token_missing_token_is_none() {
    assert_eq!(role_from_token(None), None);
}

#[test]
fn role_from_token_malformed_token_is_none() {
    for bad in ["", "garbage", "a.b.c", "h.e30.s"] {
        assert_eq!(role_from_token(Some(bad)), None, "expected no role for {bad:?}");
    }
}

#[test]
fn role_from_token_empty_role_is_none() {
    let token = token_with_payload(r#"{"role":""}"#);
    assert_eq!(role_from_token(Some(token.as_str())), None);
}
