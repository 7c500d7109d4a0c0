//! certprov: Self-Signed TLS Certificate Provisioning
//!
//! This library provisions a self-signed X.509 certificate and RSA key pair
//! for local servers and writes them as PEM files. It enables users to:
//!
//! - Generate an RSA keypair at a configurable size
//! - Self-sign a server certificate covering configurable IP and DNS
//!   subject alternative names
//! - Validate the generated material before anything touches disk
//! - Persist the pair as `server.crt` / `server.key` in an output directory
//!
//! # Architecture
//!
//! The library follows a functional programming style where the provisioning
//! flow is composed from smaller, testable functions. The certificate
//! generation capability sits behind the [`cert::selfsigned::CertificateGenerator`]
//! trait so tests can substitute a fake. All operations return `Result`
//! types with comprehensive error handling - no `unwrap()` or panic.
//!
//! # Example
//!
//! ```rust,no_run
//! use certprov::cert::selfsigned::RcgenGenerator;
//! use certprov::config::ProvisionConfig;
//! use certprov::error::Result;
//! use certprov::provision::provision;
//!
//! fn example() -> Result<()> {
//!     let config = ProvisionConfig::default();
//!     let outcome = provision(&config, &RcgenGenerator)?;
//!     println!("Wrote {}", outcome.certificate_path.display());
//!     Ok(())
//! }
//! ```

pub mod cert;
pub mod config;
pub mod crypto;
pub mod error;
pub mod provision;

// Re-export commonly used types
pub use error::{ProvisionError, Result};
