//! Route access authorization shared by the site and its host.
//!
//! This crate owns the decision of whether a route renders, waits, or
//! redirects. It has no UI and performs no I/O: callers read the stored token
//! and the current auth status themselves and pass both in explicitly.
//!
//! DESIGN
//! ======
//! - `token` turns an opaque stored token into typed [`Claims`].
//! - `status` models the tri-state "have we checked yet" flag.
//! - `guard` is one decision table keyed by [`GuardMode`], so the protected
//!   and public-only variants cannot drift apart.

pub mod guard;
pub mod status;
pub mod token;

pub use guard::{GuardContext, GuardMode, GuardOutcome, RedirectTargets, RouteGuard};
pub use status::AuthStatus;
pub use token::{Claims, DecodeError, TOKEN_STORAGE_KEY, decode_claims, role_from_token};
