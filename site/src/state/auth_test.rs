use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::util::token_store;

fn token(payload: &str) -> String {
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload))
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_unknown_without_user() {
    let state = AuthState::default();
    assert_eq!(state.status, AuthStatus::Unknown);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

// =============================================================
// from_stored_token
// =============================================================

#[test]
fn from_stored_token_none_is_signed_out() {
    let state = AuthState::from_stored_token(None);
    assert_eq!(state.status, AuthStatus::SignedOut);
    assert!(state.user.is_none());
}

#[test]
fn from_stored_token_malformed_is_signed_out() {
    let state = AuthState::from_stored_token(Some("garbage".to_owned()));
    assert_eq!(state.status, AuthStatus::SignedOut);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}

#[test]
fn malformed_stored_token_settles_signed_out_and_store_is_empty() {
    token_store::write("h.bm90IGpzb24.s");
    let state = AuthState::from_stored_token(Some("h.bm90IGpzb24.s".to_owned()));
    assert_eq!(state.status, AuthStatus::SignedOut);
    assert_eq!(state.role(), None);
    assert_eq!(token_store::read(), None);
    assert_eq!(AuthState::from_stored_token(token_store::read()).status, AuthStatus::SignedOut);
}

#[test]
fn from_stored_token_valid_is_signed_in() {
    let raw = token(r#"{"role":"admin","sub":"u-7","email":"a@okami.dev"}"#);
    let state = AuthState::from_stored_token(Some(raw.clone()));
    assert!(state.is_signed_in());
    assert_eq!(state.role(), Some("admin"));
    assert_eq!(state.token.as_deref(), Some(raw.as_str()));
    let user = state.user.unwrap();
    assert_eq!(user.id.as_deref(), Some("u-7"));
    assert_eq!(user.email.as_deref(), Some("a@okami.dev"));
}

// =============================================================
// sign_in / sign_out
// =============================================================

#[test]
fn sign_in_rejects_bad_token_and_keeps_state() {
    let mut state = AuthState::from_stored_token(None);
    assert!(state.sign_in("h.bm9wZQ.s".to_owned()).is_err());
    assert_eq!(state.status, AuthStatus::SignedOut);
}

#[test]
fn sign_out_clears_user_and_token() {
    let mut state = AuthState::from_stored_token(Some(token(r#"{"role":"user"}"#)));
    state.sign_out();
    assert_eq!(state.status, AuthStatus::SignedOut);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert_eq!(state.role(), None);
}

#[test]
fn role_treats_empty_as_missing() {
    let state = AuthState::from_stored_token(Some(token(r#"{"role":""}"#)));
    assert!(state.is_signed_in());
    assert_eq!(state.role(), None);
}
