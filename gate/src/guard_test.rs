use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::token::role_from_token;

fn signed_in(role: Option<&str>) -> GuardContext<'_> {
    GuardContext::new(AuthStatus::SignedIn, role)
}

fn signed_out(role: Option<&str>) -> GuardContext<'_> {
    GuardContext::new(AuthStatus::SignedOut, role)
}

fn unknown(role: Option<&str>) -> GuardContext<'_> {
    GuardContext::new(AuthStatus::Unknown, role)
}

// =============================================================================
// Protected
// =============================================================================

#[test]
fn protected_unknown_status_is_checking() {
    assert_eq!(RouteGuard::protected().evaluate(unknown(Some("admin"))), GuardOutcome::Checking);
    assert_eq!(
        RouteGuard::protected().with_roles(["admin"]).evaluate(unknown(None)),
        GuardOutcome::Checking
    );
}

#[test]
fn protected_signed_out_redirects_to_login() {
    for guard in [
        RouteGuard::protected(),
        RouteGuard::protected().with_roles(["admin"]),
        RouteGuard::protected().with_roles(Vec::<String>::new()),
    ] {
        assert_eq!(guard.evaluate(signed_out(Some("admin"))), GuardOutcome::RedirectLogin);
        assert_eq!(guard.evaluate(signed_out(None)), GuardOutcome::RedirectLogin);
    }
}

#[test]
fn protected_without_roles_allows_any_signed_in_user() {
    let guard = RouteGuard::protected();
    for role in [None, Some(""), Some("user"), Some("admin"), Some("anything")] {
        assert_eq!(guard.evaluate(signed_in(role)), GuardOutcome::Allow, "role {role:?}");
    }
}

#[test]
fn protected_role_not_listed_is_unauthorized() {
    let guard = RouteGuard::protected().with_roles(["admin"]);
    assert_eq!(guard.evaluate(signed_in(Some("user"))), GuardOutcome::RedirectUnauthorized);
}

#[test]
fn protected_listed_role_is_allowed() {
    let guard = RouteGuard::protected().with_roles(["admin", "user"]);
    assert_eq!(guard.evaluate(signed_in(Some("admin"))), GuardOutcome::Allow);
    assert_eq!(guard.evaluate(signed_in(Some("user"))), GuardOutcome::Allow);
}

#[test]
fn protected_missing_role_with_declared_roles_is_unauthorized() {
    let guard = RouteGuard::protected().with_roles(["admin"]);
    assert_eq!(guard.evaluate(signed_in(None)), GuardOutcome::RedirectUnauthorized);
    assert_eq!(guard.evaluate(signed_in(Some(""))), GuardOutcome::RedirectUnauthorized);
}

#[test]
fn protected_role_match_is_case_sensitive() {
    let guard = RouteGuard::protected().with_roles(["admin"]);
    assert_eq!(guard.evaluate(signed_in(Some("Admin"))), GuardOutcome::RedirectUnauthorized);
}

#[test]
fn protected_empty_role_list_admits_nobody() {
    let guard = RouteGuard::protected().with_roles(Vec::<String>::new());
    assert_eq!(guard.evaluate(signed_in(Some("admin"))), GuardOutcome::RedirectUnauthorized);
}

// =============================================================================
// PublicOnly
// =============================================================================

#[test]
fn public_only_unknown_status_is_checking() {
    assert_eq!(RouteGuard::public_only().evaluate(unknown(None)), GuardOutcome::Checking);
    assert_eq!(
        RouteGuard::public_only().with_roles(["admin"]).evaluate(unknown(None)),
        GuardOutcome::Checking
    );
}

#[test]
fn public_only_signed_in_redirects_home_regardless_of_role() {
    let guard = RouteGuard::public_only();
    for role in [None, Some("user"), Some("admin")] {
        assert_eq!(guard.evaluate(signed_in(role)), GuardOutcome::RedirectHome, "role {role:?}");
    }
}

#[test]
fn public_only_signed_out_shows_public_view() {
    assert_eq!(RouteGuard::public_only().evaluate(signed_out(None)), GuardOutcome::Allow);
}

#[test]
fn public_only_role_check_precedes_signed_in_redirect() {
    let guard = RouteGuard::public_only().with_roles(["admin"]);
    assert_eq!(guard.evaluate(signed_in(Some("user"))), GuardOutcome::RedirectUnauthorized);
    assert_eq!(guard.evaluate(signed_in(Some("admin"))), GuardOutcome::RedirectHome);
}

#[test]
fn public_only_declared_roles_without_role_is_unauthorized() {
    let guard = RouteGuard::public_only().with_roles(["admin"]);
    assert_eq!(guard.evaluate(signed_out(None)), GuardOutcome::RedirectUnauthorized);
    assert_eq!(guard.evaluate(signed_out(Some("admin"))), GuardOutcome::Allow);
}

// =============================================================================
// Cross-cutting properties
// =============================================================================

#[test]
fn evaluate_is_idempotent() {
    let guards = [
        RouteGuard::protected(),
        RouteGuard::protected().with_roles(["admin"]),
        RouteGuard::public_only(),
        RouteGuard::public_only().with_roles(["user"]),
    ];
    let statuses = [AuthStatus::Unknown, AuthStatus::SignedIn, AuthStatus::SignedOut];
    let roles = [None, Some("admin"), Some("user")];
    for guard in &guards {
        for status in statuses {
            for role in roles {
                let ctx = GuardContext::new(status, role);
                assert_eq!(guard.evaluate(ctx), guard.evaluate(ctx));
            }
        }
    }
}

#[test]
fn malformed_token_decides_like_missing_token() {
    let guards = [
        RouteGuard::protected().with_roles(["admin"]),
        RouteGuard::public_only().with_roles(["admin"]),
    ];
    let malformed = ["", "junk", "a.b.c", "h.e30.s", "h.bnVsbA.s"];
    for guard in &guards {
        for status in [AuthStatus::SignedIn, AuthStatus::SignedOut] {
            let baseline = guard.evaluate(GuardContext::new(status, None));
            for token in malformed {
                let role = role_from_token(Some(token));
                let outcome = guard.evaluate(GuardContext::new(status, role.as_deref()));
                assert_eq!(outcome, baseline, "token {token:?}");
                assert_ne!(outcome, GuardOutcome::Allow, "token {token:?}");
            }
        }
    }
}

#[test]
fn decoded_admin_token_passes_admin_guard() {
    let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode(r#"{"role":"admin"}"#));
    let role = role_from_token(Some(token.as_str()));
    let guard = RouteGuard::protected().with_roles(["admin"]);
    assert_eq!(guard.evaluate(signed_in(role.as_deref())), GuardOutcome::Allow);
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn scenario_signed_out_protected_goes_to_login() {
    let targets = RedirectTargets::default();
    let outcome = RouteGuard::protected().with_roles(["admin"]).evaluate(signed_out(None));
    assert_eq!(outcome, GuardOutcome::RedirectLogin);
    assert_eq!(outcome.redirect_target(&targets), Some("/login"));
}

#[test]
fn scenario_user_role_on_admin_route_goes_to_unauthorized() {
    let targets = RedirectTargets::default();
    let outcome = RouteGuard::protected().with_roles(["admin"]).evaluate(signed_in(Some("user")));
    assert_eq!(outcome.redirect_target(&targets), Some("/unauthorized"));
}

#[test]
fn scenario_admin_on_shared_route_renders() {
    let outcome = RouteGuard::protected().with_roles(["admin", "user"]).evaluate(signed_in(Some("admin")));
    assert_eq!(outcome, GuardOutcome::Allow);
    assert_eq!(outcome.redirect_target(&RedirectTargets::default()), None);
}

#[test]
fn scenario_public_only_unknown_renders_loading_without_redirect() {
    let outcome = RouteGuard::public_only().evaluate(unknown(None));
    assert_eq!(outcome, GuardOutcome::Checking);
    assert_eq!(outcome.redirect_target(&RedirectTargets::default()), None);
}

#[test]
fn scenario_public_only_signed_in_goes_home() {
    let outcome = RouteGuard::public_only().evaluate(signed_in(Some("user")));
    assert_eq!(outcome.redirect_target(&RedirectTargets::default()), Some("/"));
}

#[test]
fn redirect_target_uses_custom_paths() {
    let targets = RedirectTargets {
        login: "/app/login".to_owned(),
        unauthorized: "/app/403".to_owned(),
        home: "/app".to_owned(),
    };
    assert_eq!(GuardOutcome::RedirectLogin.redirect_target(&targets), Some("/app/login"));
    assert_eq!(GuardOutcome::RedirectUnauthorized.redirect_target(&targets), Some("/app/403"));
    assert_eq!(GuardOutcome::RedirectHome.redirect_target(&targets), Some("/app"));
    assert_eq!(GuardOutcome::Checking.redirect_target(&targets), None);
}

// =============================================================================
// AuthStatus
// =============================================================================

#[test]
fn auth_status_from_optional_flag() {
    assert_eq!(AuthStatus::from(None), AuthStatus::Unknown);
    assert_eq!(AuthStatus::from(Some(true)), AuthStatus::SignedIn);
    assert_eq!(AuthStatus::from(false), AuthStatus::SignedOut);
    assert_eq!(AuthStatus::default(), AuthStatus::Unknown);
    assert!(!AuthStatus::Unknown.is_settled());
    assert!(AuthStatus::SignedOut.is_settled());
}

#[test]
fn route_guard_deserializes_without_roles() {
    let guard: RouteGuard = serde_json::from_str(r#"{"mode":"public_only"}"#).unwrap();
    assert_eq!(guard, RouteGuard::public_only());
}
