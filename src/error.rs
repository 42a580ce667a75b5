//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while the
//! CLI uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level error enum
//! - Module-specific errors ([`ApiError`], [`ConfigError`]) for detailed handling
//!
//! The data-shaping operations in [`crate::model`] never fail; errors only
//! come from I/O, decoding and the remote catalog.
//!
//! [`ApiError`]: crate::remote::ApiError
//! [`ConfigError`]: crate::config::ConfigError

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Remote catalog outcome other than success
    #[error("Catalog error: {0}")]
    Api(#[from] crate::remote::ApiError),

    /// JSON decoding error
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, serde_json::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Decode(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, crate::remote::ApiError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Api(e).context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{ApiError, classify};

    #[test]
    fn test_api_error_display() {
        let err = Error::from(classify(503));
        assert!(err.to_string().contains("Service unavailable"));
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::from(ApiError::NotFound).context("while fetching album a1");
        let msg = err.to_string();
        assert!(msg.contains("while fetching album a1"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_decode_error_converts() {
        let err: Error = serde_json::from_str::<crate::model::Album>("{").unwrap_err().into();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_result_ext() {
        let result: std::result::Result<(), ApiError> = Err(ApiError::BadUrl);
        let with_ctx = result.with_context("additional context");
        assert!(with_ctx.unwrap_err().to_string().contains("additional context"));
    }
}
