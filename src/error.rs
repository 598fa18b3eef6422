//! Error types for the ocsf-models crate.

use std::path::PathBuf;

use crate::profiles::ProfileValidationErrors;

/// Errors that can occur while building, loading or validating OCSF events.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A requested profile is defined by OCSF but not supported yet.
    ///
    /// Always fatal: it is raised even when the caller asked for errors to be
    /// collected instead of raised.
    #[error("profile '{0}' is not yet supported")]
    UnsupportedProfile(String),

    /// One or more required profile fields are missing.
    #[error(transparent)]
    ProfileValidation(#[from] ProfileValidationErrors),

    /// An attribute value is outside the range the schema allows.
    #[error("invalid value for '{field}': {message}")]
    Constraint { field: String, message: String },

    /// A document carries a `class_uid` this crate does not model.
    #[error("unsupported class_uid {0} (expected one of 2003, 2004, 2007)")]
    UnknownClass(i64),

    /// Failed to read a file from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON (de)serialization error.
    #[error("invalid OCSF JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn constraint(field: &str, message: impl Into<String>) -> Self {
        Error::Constraint {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
