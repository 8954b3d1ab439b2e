//! Route handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::body::{CurrentResponse, HealthResponse, NextResponse, PreviousResponse};
use crate::AppState;

/// `GET /current`
pub async fn current(State(state): State<Arc<AppState>>) -> Json<CurrentResponse> {
    Json(CurrentResponse {
        current: state.sequence.current(),
    })
}

/// `GET /next`, advancing the sequence.
pub async fn next(State(state): State<Arc<AppState>>) -> Json<NextResponse> {
    Json(NextResponse {
        next: state.sequence.advance(),
    })
}

/// `GET /previous`
pub async fn previous(State(state): State<Arc<AppState>>) -> Json<PreviousResponse> {
    Json(PreviousResponse {
        previous: state.sequence.previous(),
    })
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::HEALTHY)
}
