use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use gate::AuthStatus;

use super::*;

fn token(role: &str) -> String {
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(format!(r#"{{"role":"{role}"}}"#)))
}

fn signed_in_as(role: &str) -> AuthState {
    AuthState::from_stored_token(Some(token(role)))
}

// =============================================================
// resolve_role
// =============================================================

#[test]
fn protected_role_comes_from_session_user() {
    let auth = signed_in_as("admin");
    let other = token("user");
    assert_eq!(resolve_role(GuardMode::Protected, &auth, Some(other.as_str())), Some("admin".to_owned()));
}

#[test]
fn public_only_role_comes_from_stored_token() {
    let auth = signed_in_as("admin");
    let stored = token("user");
    assert_eq!(resolve_role(GuardMode::PublicOnly, &auth, Some(stored.as_str())), Some("user".to_owned()));
    assert_eq!(resolve_role(GuardMode::PublicOnly, &auth, Some("junk")), None);
}

// =============================================================
// decide
// =============================================================

#[test]
fn unknown_auth_shows_loader_for_both_modes() {
    let auth = AuthState::default();
    assert_eq!(decide(&RouteGuard::protected(), &auth, None), GuardOutcome::Checking);
    assert_eq!(decide(&RouteGuard::public_only(), &auth, None), GuardOutcome::Checking);
}

#[test]
fn signed_out_visitor_is_sent_to_login_from_account() {
    let auth = AuthState::from_stored_token(None);
    assert_eq!(decide(&RouteGuard::protected(), &auth, None), GuardOutcome::RedirectLogin);
}

#[test]
fn signed_out_visitor_sees_login_page() {
    let auth = AuthState::from_stored_token(None);
    assert_eq!(decide(&RouteGuard::public_only(), &auth, None), GuardOutcome::Allow);
}

#[test]
fn signed_in_visitor_is_sent_home_from_login_page() {
    let auth = signed_in_as("user");
    let stored = token("user");
    assert_eq!(decide(&RouteGuard::public_only(), &auth, Some(stored.as_str())), GuardOutcome::RedirectHome);
}

#[test]
fn admin_only_route_rejects_user_role() {
    let guard = RouteGuard::protected().with_roles(["admin"]);
    assert_eq!(decide(&guard, &signed_in_as("user"), None), GuardOutcome::RedirectUnauthorized);
    assert_eq!(decide(&guard, &signed_in_as("admin"), None), GuardOutcome::Allow);
}

#[test]
fn public_only_with_roles_and_corrupt_token_is_unauthorized() {
    let guard = RouteGuard::public_only().with_roles(["admin"]);
    let auth = AuthState::from_stored_token(None);
    assert_eq!(decide(&guard, &auth, Some("not.a.token")), GuardOutcome::RedirectUnauthorized);
}
