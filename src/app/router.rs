use crate::app::state::AppState;
use crate::handler::health::health_handler;
use crate::handler::heartbeat::heartbeat_handler;
use crate::handler::logs::logs_handler;
use crate::handler::settings::settings_handler;
use axum::Router;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Build the HTTP router (health + device API).
pub fn main_router(state: AppState) -> Router {
    let health_router = Router::new().route("/api/v1/health", get(health_handler));

    let device_router = Router::new()
        .route("/api/v1/device/{id}/logs", post(logs_handler))
        .route("/api/v1/device/{id}/settings", get(settings_handler))
        .route("/api/v1/device/{id}/heartbeat", post(heartbeat_handler))
        .with_state(state);

    Router::new()
        .merge(health_router)
        .merge(device_router)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CatchPanicLayer::new())
}
