//! Error types shared by both report pipelines

use thiserror::Error;

/// Main error type for pharmascope operations
#[derive(Debug, Error)]
pub enum Error {
    /// Failures inside the review or trend pipelines
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Bad or unreadable configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Rejected caller input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any error wrapped with a caller-supplied context line
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// Errors bubbled up from anyhow boundaries
    #[error(transparent)]
    External(#[from] anyhow::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an analysis error
    pub fn analysis(message: impl Into<String>) -> Self {
        Self::Analysis(message.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Wrap this error with a context line
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Attaches a context line to a failing `Result`
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
