use std::time::Duration;

use crate::config::DEFAULT_HTTP_PORT;
use crate::error::HealthcheckError;

/// Perform a health check against `HTTP_PORT`, or the default port (8080)
pub async fn healthcheck() -> Result<(), HealthcheckError> {
    let port = match std::env::var("HTTP_PORT") {
        Ok(value) => value
            .parse::<u16>()
            .map_err(|source| HealthcheckError::InvalidPort { value, source })?,
        Err(_) => DEFAULT_HTTP_PORT,
    };
    healthcheck_with_port(port).await
}

/// Perform a health check against a specific port
pub async fn healthcheck_with_port(port: u16) -> Result<(), HealthcheckError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .map_err(HealthcheckError::Client)?;

    let url = format!("http://127.0.0.1:{port}/api/v1/health");

    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(HealthcheckError::Request)?;

    if resp.status().is_success() {
        Ok(())
    } else {
        Err(HealthcheckError::Status(resp.status()))
    }
}
