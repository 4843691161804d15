//! Route guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` and `PublicRoute` wrap a route's view and defer every
//! decision to [`gate::RouteGuard::evaluate`]. They differ only in their
//! [`GuardMode`] and in where the role comes from:
//!
//! - protected routes use the user already resident in [`AuthState`]
//!   (decoded once at sign-in);
//! - public-only routes decode the stored token again on each check.
//!
//! While auth is unknown both render the fullscreen loader, so no guarded
//! content is shown before the client has looked at storage.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use gate::{GuardContext, GuardMode, GuardOutcome, RedirectTargets, RouteGuard};
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::loading::Loading;
use crate::state::auth::AuthState;
use crate::util::token_store;

/// Role the guard checks, chosen by mode.
pub(crate) fn resolve_role(mode: GuardMode, auth: &AuthState, stored_token: Option<&str>) -> Option<String> {
    match mode {
        GuardMode::Protected => auth.role().map(str::to_owned),
        GuardMode::PublicOnly => gate::role_from_token(stored_token),
    }
}

/// Pure evaluation used by both components.
pub(crate) fn decide(guard: &RouteGuard, auth: &AuthState, stored_token: Option<&str>) -> GuardOutcome {
    let role = resolve_role(guard.mode, auth, stored_token);
    guard.evaluate(GuardContext::new(auth.status, role.as_deref()))
}

/// Render children only for signed-in visitors (optionally with a listed role).
#[component]
pub fn ProtectedRoute(#[prop(optional)] allowed_roles: Option<Vec<String>>, children: ChildrenFn) -> impl IntoView {
    let guard = RouteGuard { mode: GuardMode::Protected, allowed_roles };
    guarded(guard, children)
}

/// Render children only for signed-out visitors, e.g. the login page.
#[component]
pub fn PublicRoute(#[prop(optional)] allowed_roles: Option<Vec<String>>, children: ChildrenFn) -> impl IntoView {
    let guard = RouteGuard { mode: GuardMode::PublicOnly, allowed_roles };
    guarded(guard, children)
}

fn guarded(guard: RouteGuard, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let targets = use_context::<RedirectTargets>().unwrap_or_default();

    let outcome = Memo::new(move |_| {
        let state = auth.get();
        let stored = match guard.mode {
            GuardMode::PublicOnly if state.status.is_settled() => token_store::read(),
            _ => None,
        };
        decide(&guard, &state, stored.as_deref())
    });

    move || {
        let current = outcome.get();
        match current.redirect_target(&targets) {
            Some(path) => view! { <Redirect path=path.to_owned()/> }.into_any(),
            None if current == GuardOutcome::Checking => view! { <Loading fullscreen=true/> }.into_any(),
            None => children().into_any(),
        }
    }
}
