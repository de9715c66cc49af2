use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Json,
    Plain,
}

impl LogFormat {
    /// JSON unless `RUST_LOG_FORMAT` names something else.
    fn from_env_value(value: Option<&str>) -> Self {
        match value {
            None | Some("json") => LogFormat::Json,
            Some(_) => LogFormat::Plain,
        }
    }
}

/// `RUST_LOG` directives when present and valid, `info` otherwise.
fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the tracing subscriber from `RUST_LOG` and `RUST_LOG_FORMAT`.
pub fn init_tracing() {
    let filter = env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    let format = LogFormat::from_env_value(std::env::var("RUST_LOG_FORMAT").ok().as_deref());

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true),
            )
            .with(filter)
            .init(),
        LogFormat::Plain => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
    }
}
