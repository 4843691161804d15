//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! cheap to clone: the config and the feedback inbox sit behind `Arc`s. The
//! inbox is a bounded queue; once full, the oldest entry is dropped.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use site::net::types::FeedbackRequest;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::ServerConfig;

/// A validated feedback submission held in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    pub id: Uuid,
    pub received_at_ms: u64,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FeedbackEntry {
    /// Wrap an already validated request with a fresh id and timestamp.
    #[must_use]
    pub fn new(request: FeedbackRequest) -> Self {
        let received_at_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
        Self {
            id: Uuid::new_v4(),
            received_at_ms,
            name: request.name,
            email: request.email,
            message: request.message,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub inbox: Arc<RwLock<VecDeque<FeedbackEntry>>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let cap = config.feedback_inbox_cap;
        Self { config: Arc::new(config), inbox: Arc::new(RwLock::new(VecDeque::with_capacity(cap))) }
    }

    /// Append an entry, dropping the oldest ones past capacity. Returns how
    /// many were dropped.
    pub async fn push_feedback(&self, entry: FeedbackEntry) -> usize {
        let cap = self.config.feedback_inbox_cap.max(1);
        let mut inbox = self.inbox.write().await;
        inbox.push_back(entry);
        let mut dropped = 0;
        while inbox.len() > cap {
            inbox.pop_front();
            dropped += 1;
        }
        dropped
    }

    pub async fn feedback_len(&self) -> usize {
        self.inbox.read().await.len()
    }
}
