use crate::app::state::AppState;
use crate::domain::DeviceId;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use tracing::debug;

/// Handler for POST /api/v1/device/{id}/heartbeat
pub async fn heartbeat_handler(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> StatusCode {
    debug!(device = %device_id, "Heartbeat received");
    state.heartbeats.record(DeviceId::from(device_id), Utc::now());
    StatusCode::OK
}
