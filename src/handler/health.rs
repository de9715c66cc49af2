use tracing::debug;

/// Handler for GET /api/v1/health
pub async fn health_handler() -> &'static str {
    debug!("Health check requested");
    "Healthy"
}
