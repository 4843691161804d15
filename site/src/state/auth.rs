//! Auth-session state for the current browser visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guards and the navbar. Written only through
//! [`AuthState::sign_in`] and [`AuthState::sign_out`], which the login page
//! and the logout action call after touching the token store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gate::{AuthStatus, Claims, DecodeError, decode_claims};

use crate::util::token_store;

/// Identity of the signed-in visitor, taken from the token claims at login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: Option<String>,
    pub email: Option<String>,
    pub role: String,
}

impl From<Claims> for User {
    fn from(claims: Claims) -> Self {
        Self { id: claims.sub, email: claims.email, role: claims.role }
    }
}

/// Authentication state tracking the current user and whether it is known yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub user: Option<User>,
    pub token: Option<String>,
}

impl AuthState {
    /// Settle auth from whatever the token store held at startup.
    ///
    /// A missing or undecodable token yields a signed-out state. An
    /// undecodable one is also removed from the token store.
    #[must_use]
    pub fn from_stored_token(token: Option<String>) -> Self {
        let mut state = Self { status: AuthStatus::SignedOut, ..Self::default() };
        if let Some(token) = token {
            if let Err(e) = state.sign_in(token) {
                #[cfg(feature = "hydrate")]
                log::warn!("auth: stored token rejected, clearing it: {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = e;
                token_store::clear();
            }
        }
        state
    }

    /// Decode `token` and, if it carries claims, mark the visitor signed in.
    ///
    /// # Errors
    ///
    /// Returns the decode error and leaves the state untouched when the token
    /// cannot be decoded.
    pub fn sign_in(&mut self, token: String) -> Result<(), DecodeError> {
        let claims = decode_claims(&token)?;
        self.user = Some(User::from(claims));
        self.token = Some(token);
        self.status = AuthStatus::SignedIn;
        Ok(())
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.token = None;
        self.status = AuthStatus::SignedOut;
    }

    /// Role of the resident user; an empty role counts as none.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.role.as_str()).filter(|r| !r.is_empty())
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.status == AuthStatus::SignedIn
    }
}
