//! Tri-state authentication flag.

use serde::{Deserialize, Serialize};

/// Whether the current visitor is signed in.
///
/// `Unknown` is the state before the stored credentials have been inspected
/// (e.g. during server rendering, or before hydration reads storage). Guards
/// treat it as a suspension point rather than as either answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStatus {
    #[default]
    Unknown,
    SignedIn,
    SignedOut,
}

impl AuthStatus {
    #[must_use]
    pub fn is_settled(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl From<Option<bool>> for AuthStatus {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Self::Unknown,
            Some(true) => Self::SignedIn,
            Some(false) => Self::SignedOut,
        }
    }
}

impl From<bool> for AuthStatus {
    fn from(value: bool) -> Self {
        Self::from(Some(value))
    }
}
