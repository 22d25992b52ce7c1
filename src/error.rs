use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid catalog URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unsupported catalog URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("Request timeout must be at least one second")]
    ZeroTimeout,

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("Failed to install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
