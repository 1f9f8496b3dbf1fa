//! Error types for the xlate core library
//!
//! Every error here signals a broken schema definition or broken hook wiring,
//! never bad user data. They are returned instead of unwound so that callers
//! can log diagnostics before giving up.

use crate::shape::DisallowedKind;
use thiserror::Error;

/// Main error type for translator operations
#[derive(Error, Debug)]
pub enum Error {
    /// A schema type contains a kind that can never appear in a config
    #[error("Encountered invalid kind {kind} in schema type {type_name}")]
    DisallowedKind {
        kind: DisallowedKind,
        type_name: String,
    },

    /// A hook was rejected at registration time
    #[error("Invalid hook {from} -> {to}: {message}")]
    InvalidHook {
        from: String,
        to: String,
        message: String,
    },

    /// No hook and no structural conversion exists for a type pair
    #[error("Translator not defined for {from} to {to}")]
    NoConversion { from: String, to: String },

    /// Source and destination diverged while copying a pair that was
    /// judged compatible
    #[error("Type mismatch at {path}: {message}")]
    TypeMismatch { path: String, message: String },

    /// Generic internal error with context
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal {
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoConversion {
            from: "v1::Config".to_string(),
            to: "v2::Config".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Translator not defined for v1::Config to v2::Config"
        );
    }

    #[test]
    fn test_disallowed_kind_display() {
        let err = Error::DisallowedKind {
            kind: DisallowedKind::Map,
            type_name: "Settings".to_string(),
        };
        assert!(err.to_string().contains("invalid kind map"));
        assert!(err.to_string().contains("Settings"));
    }

    #[test]
    fn test_from_anyhow() {
        let err: Error = anyhow::anyhow!("hook blew up").into();
        match err {
            Error::Internal { message, .. } => assert_eq!(message, "hook blew up"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
