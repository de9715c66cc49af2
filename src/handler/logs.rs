use crate::app::state::AppState;
use crate::domain::DeviceId;
use crate::error::IngestError;
use crate::ingest::ingest;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use bytes::Bytes;
use http_body_util::{BodyExt, Limited};
use tracing::{instrument, warn};

/// Handler for POST /api/v1/device/{id}/logs
///
/// The body is read in full before decoding. Success is an empty 200.
#[instrument(skip_all, fields(device = %device_id))]
pub async fn logs_handler(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
    body: Body,
) -> impl IntoResponse {
    let result = match read_body(body, state.max_body_bytes).await {
        Ok(raw) => ingest(state.log_store.as_ref(), DeviceId::from(device_id), &raw),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => (StatusCode::OK, ""),
        Err(e @ IngestError::Read(_)) => {
            warn!(error = %e, "Dropped log submission");
            (StatusCode::BAD_REQUEST, "Failed to read request body")
        }
        Err(e @ IngestError::Decode(_)) => {
            warn!(error = %e, "Dropped log submission");
            (StatusCode::BAD_REQUEST, "Invalid log entry")
        }
    }
}

async fn read_body(body: Body, limit: usize) -> Result<Bytes, IngestError> {
    Limited::new(body, limit)
        .collect()
        .await
        .map(|collected| collected.to_bytes())
        .map_err(|e| IngestError::Read(e.to_string()))
}
