//! HTTP API handlers

use std::time::Instant;

use axum::{extract::State, Json};
use serde::Serialize;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    started: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "roomboard",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.started.elapsed().as_secs(),
    })
}
