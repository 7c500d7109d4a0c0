//! Error types for certificate provisioning.
//!
//! This module defines all error types used throughout the library.
//! All errors implement `std::error::Error` and are designed to provide
//! clear, actionable error messages.

use thiserror::Error;

/// The main error type for provisioning operations.
///
/// This enum covers all possible errors that can occur during key
/// generation, certificate generation, validation, and persistence.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// RSA key generation failed
    #[error("Key generation error: {0}")]
    KeyError(String),

    /// The certificate generation capability failed
    #[error("Certificate generation error: {0}")]
    GenerationFailed(String),

    /// The generator returned but omitted required material
    #[error("Certificate material incomplete: {0}")]
    GenerationIncomplete(String),

    /// PEM encoding/decoding error
    #[error("PEM error: {0}")]
    PemError(String),

    /// Directory creation or file write failed
    #[error("Filesystem error: {0}")]
    FilesystemError(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ProvisionError {
    /// Process exit code for this error.
    ///
    /// Generation failures (the capability itself cannot produce a key or
    /// certificate) exit with 2; every other fatal error exits with 1.
    /// Only the binary entry point consumes this.
    pub fn exit_code(&self) -> i32 {
        match self {
            ProvisionError::KeyError(_) | ProvisionError::GenerationFailed(_) => 2,
            _ => 1,
        }
    }
}

/// A specialized Result type for provisioning operations.
pub type Result<T> = std::result::Result<T, ProvisionError>;
