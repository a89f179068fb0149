//! Unified error types.

use thiserror::Error;

/// Boxed collaborator error, kept intact so callers can downcast it.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Missing pair: a pair address is required to compute price history")]
    MissingPair,

    #[error("Invalid period: {0:?} (expected one of 1h, 24h, 7d, 30d)")]
    InvalidPeriod(String),

    #[error("Invalid accumulator '{value}': {reason}")]
    InvalidAccumulator { value: String, reason: String },

    #[error("Observation source error: {0}")]
    Source(#[source] SourceError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl SdkError {
    /// Wrap a collaborator error without altering it.
    pub fn from_source<E>(err: E) -> Self
    where
        E: Into<SourceError>,
    {
        SdkError::Source(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, Error)]
    #[error("node unreachable")]
    struct TransportError;

    #[test]
    fn test_source_error_is_downcastable() {
        let err = SdkError::from_source(TransportError);
        assert_eq!(err.to_string(), "Observation source error: node unreachable");
        let inner = err.source().unwrap();
        assert!(inner.downcast_ref::<TransportError>().is_some());
    }

    #[test]
    fn test_invalid_period_message() {
        let err = SdkError::InvalidPeriod("2w".to_string());
        assert!(err.to_string().contains("\"2w\""));
    }
}
