/// Error types for the ollamark crate.
use thiserror::Error;

/// Fatal configuration problems, detected before any probing starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no targets supplied: use --ip or --file")]
    NoTargets,

    #[error("failed to read target file {path}: {source}")]
    TargetFile {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Failures while listing a host's models. Terminal for that target's probe.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("model check timed out after {seconds:.1}s")]
    Timeout { seconds: f64 },

    #[error("connection refused: {0}")]
    ConnectionRefused(String),

    #[error("invalid model list response: {0}")]
    InvalidResponse(String),

    #[error("no models available")]
    NoModelsAvailable,
}

/// Failures while running the timed generation request.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("generation timed out after {seconds:.1}s")]
    Timeout { seconds: f64 },

    #[error("connection refused: {0}")]
    ConnectionRefused(String),

    #[error("invalid generation response: {0}")]
    InvalidResponse(String),

    #[error("server error: {0}")]
    ServerError(String),
}

/// Application-level errors. Only these abort the run.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Runtime error: {0}")]
    Runtime(String),
}
