#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    /// Error text reported by the server in an `{error}` body, shown verbatim.
    #[error("{0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Failed to parse response: {0}")]
    DecodeError(String),

    #[error("Failed to read file: {0}")]
    FileError(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Render error: {0}")]
    RenderError(String),
}
