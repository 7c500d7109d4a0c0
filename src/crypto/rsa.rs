//! RSA key operations.
//!
//! This module provides functions for generating RSA keypairs and encoding
//! them as PEM for certificate generation and persistence.

use crate::error::{ProvisionError, Result};
use rand::rngs::OsRng;
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

/// Smallest key size accepted for provisioning.
///
/// The signing backend rejects shorter RSA keys, so they are refused up
/// front with a clearer message.
pub const MIN_KEY_SIZE_BITS: usize = 2048;

/// An RSA keypair consisting of a private key and its public key.
#[derive(Debug, Clone)]
pub struct Keypair {
    pub private: RsaPrivateKey,
    pub public: RsaPublicKey,
}

impl Keypair {
    /// Create a keypair from a private key, deriving the public half.
    pub fn from_private(private: RsaPrivateKey) -> Self {
        let public = RsaPublicKey::from(&private);
        Self { private, public }
    }

    /// Key size in bits.
    pub fn size_bits(&self) -> usize {
        self.private.size() * 8
    }

    /// Encode the private key as PKCS#8 PEM.
    pub fn private_key_pem(&self) -> Result<String> {
        self.private
            .to_pkcs8_pem(LineEnding::LF)
            .map(|pem| pem.to_string())
            .map_err(|e| ProvisionError::PemError(format!("Failed to encode private key: {}", e)))
    }

    /// Encode the public key as SPKI PEM.
    pub fn public_key_pem(&self) -> Result<String> {
        self.public
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| ProvisionError::PemError(format!("Failed to encode public key: {}", e)))
    }
}

/// Generate a new RSA keypair using a cryptographically secure random
/// number generator.
///
/// # Example
///
/// ```rust,no_run
/// use certprov::crypto::rsa::generate_rsa_keypair;
///
/// # fn example() -> certprov::error::Result<()> {
/// let keypair = generate_rsa_keypair(2048)?;
/// assert_eq!(keypair.size_bits(), 2048);
/// # Ok(())
/// # }
/// ```
pub fn generate_rsa_keypair(bits: usize) -> Result<Keypair> {
    if bits < MIN_KEY_SIZE_BITS {
        return Err(ProvisionError::KeyError(format!(
            "RSA key size must be at least {} bits, got {}",
            MIN_KEY_SIZE_BITS, bits
        )));
    }

    let private = RsaPrivateKey::new(&mut OsRng, bits)
        .map_err(|e| ProvisionError::KeyError(format!("Failed to generate RSA key: {}", e)))?;

    Ok(Keypair::from_private(private))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_keypair_produces_valid_keys() {
        let keypair = generate_rsa_keypair(2048).unwrap();

        assert_eq!(keypair.size_bits(), 2048);

        // Public key should match the one derived from the private key
        let derived = RsaPublicKey::from(&keypair.private);
        assert_eq!(derived, keypair.public);
    }

    #[test]
    fn test_keypair_pem_encodings() {
        let keypair = generate_rsa_keypair(2048).unwrap();

        let private_pem = keypair.private_key_pem().unwrap();
        assert!(private_pem.contains("BEGIN PRIVATE KEY"));
        assert!(private_pem.contains("END PRIVATE KEY"));

        let public_pem = keypair.public_key_pem().unwrap();
        assert!(public_pem.contains("BEGIN PUBLIC KEY"));
        assert!(public_pem.contains("END PUBLIC KEY"));
    }

    #[test]
    fn test_generate_keypair_rejects_short_keys() {
        let result = generate_rsa_keypair(1024);
        assert!(result.is_err());

        match result {
            Err(ProvisionError::KeyError(msg)) => {
                assert!(msg.contains("at least 2048 bits"));
            }
            _ => panic!("Expected KeyError"),
        }
    }
}
