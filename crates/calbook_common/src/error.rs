// --- File: crates/calbook_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Calbook errors.
///
/// This enum provides a common set of error variants that can be used across all crates.
/// Each crate can extend this by implementing From<SpecificError> for CalbookError.
///
/// Variants whose message is shown to API clients (`ValidationError`,
/// `NotFoundError`, `ParseError`) display the raw message with no prefix so
/// the wire body stays exactly what the handler wrote.
#[derive(Error, Debug)]
pub enum CalbookError {
    /// Error occurred while parsing client-supplied data
    #[error("{0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("{0}")]
    ValidationError(String),

    /// Error occurred while reading or writing a persisted document
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Error occurred due to a resource not being found
    #[error("{0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for CalbookError {
    fn status_code(&self) -> u16 {
        match self {
            CalbookError::ParseError(_) => 400,
            CalbookError::ConfigError(_) => 500,
            CalbookError::ValidationError(_) => 400,
            CalbookError::StorageError(_) => 500,
            CalbookError::NotFoundError(_) => 404,
            CalbookError::InternalError(_) => 500,
        }
    }
}

// Common error conversions
impl From<serde_json::Error> for CalbookError {
    fn from(err: serde_json::Error) -> Self {
        CalbookError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for CalbookError {
    fn from(err: std::io::Error) -> Self {
        CalbookError::StorageError(err.to_string())
    }
}

// Utility functions for error handling
pub fn parse_error<T: fmt::Display>(message: T) -> CalbookError {
    CalbookError::ParseError(message.to_string())
}

pub fn config_error<T: fmt::Display>(message: T) -> CalbookError {
    CalbookError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> CalbookError {
    CalbookError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> CalbookError {
    CalbookError::NotFoundError(message.to_string())
}

pub fn storage_error<T: fmt::Display>(message: T) -> CalbookError {
    CalbookError::StorageError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> CalbookError {
    CalbookError::InternalError(message.to_string())
}
