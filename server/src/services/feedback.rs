//! Feedback intake service.
//!
//! Validates submissions with the same rules as the site's form, records them
//! in the in-memory inbox, and optionally forwards them by email via Resend.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;
use site::net::types::FeedbackRequest;

use crate::config::ResendConfig;
use crate::state::{AppState, FeedbackEntry};

const FEEDBACK_TEMPLATE: &str = include_str!("../../templates/feedback.html");

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("{0}")]
    Invalid(&'static str),
    #[error("email delivery failed: {0}")]
    EmailDelivery(String),
}

/// Validate and store a submission.
///
/// # Errors
///
/// Returns [`FeedbackError::Invalid`] with a user-facing message when the
/// request fails validation.
pub async fn record(state: &AppState, request: &FeedbackRequest) -> Result<FeedbackEntry, FeedbackError> {
    let request = request.validate().map_err(FeedbackError::Invalid)?;
    let entry = FeedbackEntry::new(request);
    let dropped = state.push_feedback(entry.clone()).await;
    if dropped > 0 {
        tracing::debug!(dropped, "feedback inbox at capacity, oldest entries dropped");
    }
    Ok(entry)
}

/// Send one entry to the configured inbox address.
///
/// # Errors
///
/// Returns [`FeedbackError::EmailDelivery`] when Resend rejects the request.
pub async fn forward(config: &ResendConfig, entry: &FeedbackEntry) -> Result<(), FeedbackError> {
    let resend = Resend::new(&config.api_key);
    let to = [config.to.as_str()];
    let subject = feedback_subject(entry);
    let html = render_feedback_template(entry);

    let email = CreateEmailBaseOptions::new(config.from.as_str(), to, subject).with_html(&html);
    resend
        .emails
        .send(email)
        .await
        .map_err(|e| FeedbackError::EmailDelivery(e.to_string()))?;
    Ok(())
}

#[must_use]
pub fn feedback_subject(entry: &FeedbackEntry) -> String {
    format!("Okami UI feedback from {}", entry.name)
}

#[must_use]
pub fn render_feedback_template(entry: &FeedbackEntry) -> String {
    FEEDBACK_TEMPLATE
        .replace("{{ID}}", &entry.id.to_string())
        .replace("{{NAME}}", &escape_html(&entry.name))
        .replace("{{EMAIL}}", &escape_html(&entry.email))
        .replace("{{MESSAGE}}", &escape_html(&entry.message))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
