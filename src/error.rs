use thiserror::Error;

/// Process-level failures: startup and serving.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Failure to turn a raw request body into a `LogEntry`.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Payload too short to strip framing: {len} bytes")]
    TooShort { len: usize },

    #[error("Log entry payload is not a JSON object")]
    NotAnObject,

    #[error("Malformed log entry: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failure of a single ingestion request. Nothing is stored when this is returned.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read request body: {0}")]
    Read(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Failure of the `healthcheck` subcommand.
#[derive(Error, Debug)]
pub enum HealthcheckError {
    #[error("Invalid HTTP_PORT {value}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Health endpoint returned status: {0}")]
    Status(reqwest::StatusCode),
}
