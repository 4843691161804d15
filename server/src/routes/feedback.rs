//! Feedback route: `POST /api/feedback`.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use site::net::types::{ApiError, FeedbackAccepted, FeedbackRequest};

use crate::services::feedback::{self as feedback_svc, FeedbackError};
use crate::state::AppState;

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiError { error: message.into() })).into_response()
}

/// Accept a feedback submission.
///
/// Invalid bodies get 422 with `{ "error": ... }`. Valid ones are stored and
/// answered with 202 and the entry id; email forwarding runs in the
/// background and only logs on failure.
pub async fn submit(State(state): State<AppState>, body: Result<Json<FeedbackRequest>, JsonRejection>) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "malformed feedback body");
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let entry = match feedback_svc::record(&state, &request).await {
        Ok(entry) => entry,
        Err(FeedbackError::Invalid(message)) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, message),
        Err(e) => {
            tracing::error!(error = %e, "feedback intake failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "feedback intake failed");
        }
    };

    let inbox = state.feedback_len().await;
    tracing::info!(id = %entry.id, inbox, "feedback received");

    if let Some(resend) = state.config.resend.clone() {
        let entry = entry.clone();
        tokio::spawn(async move {
            if let Err(e) = feedback_svc::forward(&resend, &entry).await {
                tracing::warn!(id = %entry.id, error = %e, "feedback forwarding failed");
            }
        });
    }

    (StatusCode::ACCEPTED, Json(FeedbackAccepted { id: entry.id.to_string() })).into_response()
}
