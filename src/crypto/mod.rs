//! Cryptographic operations module.
//!
//! This module provides the key material side of provisioning:
//!
//! - RSA keypair generation at a configurable size
//! - PKCS#8 / SPKI PEM encodings of the generated keys
//!
//! The mathematics live in the `rsa` crate; this module only wraps
//! generation and encoding behind the crate's error type.

pub mod rsa;
