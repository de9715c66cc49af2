pub mod router;
pub mod server;
pub mod state;
pub mod tracing;

use crate::config;
use crate::error::ServerError;
use tokio_util::sync::CancellationToken;

/// Application entry point. Initializes tracing, configuration, and starts the server.
pub async fn run() -> Result<(), ServerError> {
    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        match crate::healthcheck().await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("Healthcheck failed: {e}");
                std::process::exit(1)
            }
        }
    }

    tracing::init_tracing();

    let settings = config::get_configuration().map_err(|e| ServerError::Config(format!("{e:#}")))?;
    ::tracing::info!(
        port = settings.http_port,
        priorities = ?settings.device_priorities,
        "Loaded settings"
    );

    let app_state = state::AppState::from_settings(&settings);
    let app = router::main_router(app_state);

    let listener = server::bind(&settings.bind_address, settings.http_port).await?;
    server::serve(listener, app, CancellationToken::new()).await
}
