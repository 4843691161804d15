//! Request/response DTOs for the site's HTTP calls.
//!
//! DESIGN
//! ======
//! `FeedbackRequest` is shared with the `server` crate, which deserializes the
//! same struct, so the form and the endpoint cannot disagree on field names.
//! Discord widget types only model the fields the site renders.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub const FEEDBACK_MESSAGE_MIN: usize = 10;
pub const FEEDBACK_MESSAGE_MAX: usize = 5000;

/// Body of `POST /api/feedback`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FeedbackRequest {
    /// Trim fields and check them; returns the normalized request.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message naming the first invalid field.
    pub fn validate(&self) -> Result<Self, &'static str> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err("Please tell us your name.");
        }
        if !is_plausible_email(email) {
            return Err("Please enter a valid email address.");
        }
        let len = message.chars().count();
        if len < FEEDBACK_MESSAGE_MIN {
            return Err("Your message is a little short.");
        }
        if len > FEEDBACK_MESSAGE_MAX {
            return Err("Your message is too long.");
        }
        Ok(Self { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
    }
}

fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        _ => false,
    }
}

/// Body returned by a successful `POST /api/feedback`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackAccepted {
    pub id: String,
}

/// Error body returned by the site's API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Presence of a Discord member as reported by the guild widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Online,
    Idle,
    Dnd,
    #[default]
    #[serde(other)]
    Offline,
}

impl MemberStatus {
    /// Display order: online first, offline last.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Online => 0,
            Self::Idle => 1,
            Self::Dnd => 2,
            Self::Offline => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Idle => "Idle",
            Self::Dnd => "Do not disturb",
            Self::Offline => "Offline",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberActivity {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordMember {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub status: MemberStatus,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub game: Option<MemberActivity>,
}

/// `GET https://discord.com/api/guilds/{id}/widget.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordWidget {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub instant_invite: Option<String>,
    #[serde(default)]
    pub presence_count: u32,
    #[serde(default)]
    pub members: Vec<DiscordMember>,
}

impl DiscordWidget {
    /// Members ordered by status, then case-insensitively by name.
    #[must_use]
    pub fn sorted_members(&self) -> Vec<DiscordMember> {
        let mut members = self.members.clone();
        members.sort_by(|a, b| {
            a.status
                .rank()
                .cmp(&b.status.rank())
                .then_with(|| a.username.to_lowercase().cmp(&b.username.to_lowercase()))
        });
        members
    }
}
