//! Error types for the soulscape service.

/// Top-level error type.
///
/// The scoring core itself is infallible; these variants cover startup
/// (config and table loading) and the request boundary.
#[derive(Debug, thiserror::Error)]
pub enum SoulscapeError {
    /// Configuration file could not be parsed or serialized.
    #[error("config error: {0}")]
    Config(String),

    /// Emotion, risk or coping tables failed to load or validate.
    #[error("table error: {0}")]
    Tables(String),

    /// Request rejected before reaching the analysis core.
    #[error("{0}")]
    InvalidInput(String),

    /// HTTP server or stdio bridge failure.
    #[error("server error: {0}")]
    Server(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, SoulscapeError>;
