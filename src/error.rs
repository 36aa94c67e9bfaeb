//! Error types for the sigid library.
//!
//! This module defines all error types used throughout the library.
//! All errors implement `std::error::Error` and are designed to provide
//! clear, actionable error messages.

use thiserror::Error;

/// The main error type for sigid operations.
///
/// This enum covers all possible errors that can occur during key
/// generation, persistence, and signing.
#[derive(Error, Debug)]
pub enum SigidError {
    /// Cryptographic operation failed
    #[error("Cryptographic error: {0}")]
    CryptoError(String),

    /// Invalid key format or content
    #[error("Invalid key: {0}")]
    InvalidKeyError(String),

    /// Signature computation failed
    #[error("Signature error: {0}")]
    SignatureError(String),

    /// Storage I/O error
    #[error("Storage I/O error: {0}")]
    StorageError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// PEM encoding/decoding error
    #[error("PEM error: {0}")]
    PemError(String),

    /// Invalid user input (rejected before any core operation runs)
    #[error("Invalid input: {0}")]
    InvalidInputError(String),
}

/// A specialized Result type for sigid operations.
pub type Result<T> = std::result::Result<T, SigidError>;
