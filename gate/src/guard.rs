//! Route authorization decision table.
//!
//! DESIGN
//! ======
//! Protected and public-only routes share one evaluator keyed by
//! [`GuardMode`]. Their default branches are inverted (protected routes admit
//! signed-in visitors, public-only routes admit signed-out ones) but the
//! "still checking" and role-restriction branches are common.
//!
//! The evaluator is pure. Callers pass a [`GuardContext`] holding the current
//! [`AuthStatus`] and the role to check, so the same inputs always produce the
//! same [`GuardOutcome`].

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use serde::{Deserialize, Serialize};

use crate::status::AuthStatus;

/// Which way a guarded route faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardMode {
    /// Private view: only signed-in visitors get through.
    Protected,
    /// Sign-in style view: hidden from visitors who are already signed in.
    PublicOnly,
}

/// Result of evaluating a guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardOutcome {
    /// Auth status is not known yet; render a blocking loading indicator.
    Checking,
    /// Render the requested view.
    Allow,
    /// Not signed in; send the visitor to the login view.
    RedirectLogin,
    /// Role missing or not permitted; send the visitor to the unauthorized view.
    RedirectUnauthorized,
    /// Already signed in; a public-only view sends the visitor home.
    RedirectHome,
}

impl GuardOutcome {
    /// Path to navigate to, or `None` when the outcome renders in place.
    #[must_use]
    pub fn redirect_target(self, targets: &RedirectTargets) -> Option<&str> {
        match self {
            Self::Checking | Self::Allow => None,
            Self::RedirectLogin => Some(targets.login.as_str()),
            Self::RedirectUnauthorized => Some(targets.unauthorized.as_str()),
            Self::RedirectHome => Some(targets.home.as_str()),
        }
    }
}

/// Destinations for the three redirect outcomes, owned by the routing layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectTargets {
    pub login: String,
    pub unauthorized: String,
    pub home: String,
}

impl Default for RedirectTargets {
    fn default() -> Self {
        Self { login: "/login".to_owned(), unauthorized: "/unauthorized".to_owned(), home: "/".to_owned() }
    }
}

/// Inputs to a single guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardContext<'a> {
    pub status: AuthStatus,
    /// Role to check against `allowed_roles`. `None` covers both "no token"
    /// and "token failed to decode".
    pub role: Option<&'a str>,
}

impl<'a> GuardContext<'a> {
    #[must_use]
    pub fn new(status: AuthStatus, role: Option<&'a str>) -> Self {
        Self { status, role }
    }
}

/// Per-route guard configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteGuard {
    pub mode: GuardMode,
    /// `None` means no role restriction. `Some(vec![])` admits no role at all.
    #[serde(default)]
    pub allowed_roles: Option<Vec<String>>,
}

impl RouteGuard {
    /// Protected route with no role restriction.
    #[must_use]
    pub fn protected() -> Self {
        Self { mode: GuardMode::Protected, allowed_roles: None }
    }

    /// Public-only route with no role restriction.
    #[must_use]
    pub fn public_only() -> Self {
        Self { mode: GuardMode::PublicOnly, allowed_roles: None }
    }

    /// Restrict the route to the given roles.
    #[must_use]
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_roles = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    /// `true` when the route declares roles and `role` is absent or unlisted.
    #[must_use]
    pub fn forbids(&self, role: Option<&str>) -> bool {
        let Some(allowed) = &self.allowed_roles else {
            return false;
        };
        match role.filter(|r| !r.is_empty()) {
            Some(role) => !allowed.iter().any(|a| a == role),
            None => true,
        }
    }

    /// Decide what the route should render for `ctx`.
    #[must_use]
    pub fn evaluate(&self, ctx: GuardContext<'_>) -> GuardOutcome {
        if ctx.status == AuthStatus::Unknown {
            return GuardOutcome::Checking;
        }

        match self.mode {
            GuardMode::Protected => match ctx.status {
                AuthStatus::SignedOut => GuardOutcome::RedirectLogin,
                _ if self.forbids(ctx.role) => GuardOutcome::RedirectUnauthorized,
                _ => GuardOutcome::Allow,
            },
            GuardMode::PublicOnly => {
                if self.forbids(ctx.role) {
                    GuardOutcome::RedirectUnauthorized
                } else if ctx.status == AuthStatus::SignedIn {
                    GuardOutcome::RedirectHome
                } else {
                    GuardOutcome::Allow
                }
            }
        }
    }
}
