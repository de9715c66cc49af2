use crate::app::state::AppState;
use crate::domain::DeviceSettings;
use axum::Json;
use axum::extract::{Path, State};
use tracing::debug;

/// Handler for GET /api/v1/device/{id}/settings
///
/// Every device currently receives the same configured priorities.
pub async fn settings_handler(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> Json<DeviceSettings> {
    debug!(device = %device_id, "Settings requested");
    Json(state.device_settings.as_ref().clone())
}
