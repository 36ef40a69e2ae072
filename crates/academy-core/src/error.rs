//! Error types for the Micro-Academy core.
//!
//! This module defines the error taxonomy shared by the registry, loaders,
//! and page resolver, and the mapping from errors to HTTP status codes used
//! by the serving layer.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Micro-Academy operations.
#[derive(Debug, Error)]
pub enum AcademyError {
    // Resolution errors
    #[error("Unknown module: {slug}")]
    UnknownModule { slug: String },

    #[error("Module '{slug}' failed to load: {message}")]
    ModuleLoadFailed { slug: String, message: String },

    // Registry construction errors
    #[error("Invalid slug '{slug}': {reason}")]
    InvalidSlug { slug: String, reason: String },

    #[error("Duplicate slug in registry: {slug}")]
    DuplicateSlug { slug: String },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for Micro-Academy operations.
pub type Result<T> = std::result::Result<T, AcademyError>;

// Conversion implementations for common error types

impl From<std::io::Error> for AcademyError {
    fn from(err: std::io::Error) -> Self {
        AcademyError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for AcademyError {
    fn from(err: serde_json::Error) -> Self {
        AcademyError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl AcademyError {
    /// Create a module-load failure from any error source.
    pub fn load_failed(slug: impl Into<String>, err: impl std::fmt::Display) -> Self {
        AcademyError::ModuleLoadFailed {
            slug: slug.into(),
            message: err.to_string(),
        }
    }

    /// Convert to an HTTP status code for the serving layer.
    ///
    /// - 404: unknown module (the deliberate NotFound mapping)
    /// - 502: a registered module's loader failed to resolve
    /// - 400: request-level validation problems
    /// - 500: everything else (registry construction errors never reach
    ///   request handling; they abort startup)
    pub fn http_status(&self) -> u16 {
        match self {
            AcademyError::UnknownModule { .. } => 404,
            AcademyError::ModuleLoadFailed { .. } => 502,
            AcademyError::InvalidSlug { .. } => 400,
            _ => 500,
        }
    }
}
