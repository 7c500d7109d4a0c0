//! Generated certificate material and its validation.
//!
//! The generation capability returns PEM strings; nothing is persisted
//! until [`CertificateMaterial::ensure_complete`] has accepted them.

use crate::error::{ProvisionError, Result};
use rustls_pemfile::Item;
use std::io::Cursor;

/// PEM-encoded output of a certificate generation run.
///
/// Produced atomically: either all required fields are populated or the
/// generation call fails.
#[derive(Debug, Clone)]
pub struct CertificateMaterial {
    /// The self-signed certificate.
    pub certificate_pem: String,

    /// The private key (PKCS#8).
    pub private_key_pem: String,

    /// The public key, when the generator exposes it separately.
    pub public_key_pem: Option<String>,
}

impl CertificateMaterial {
    /// Validate that the material is complete and well-formed.
    ///
    /// Both the certificate and the private key must be non-empty and parse
    /// as the expected PEM item. Anything else is treated as a generation
    /// failure and nothing is written to disk.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use certprov::cert::material::CertificateMaterial;
    ///
    /// # fn example(material: CertificateMaterial) -> certprov::error::Result<()> {
    /// material.ensure_complete()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn ensure_complete(&self) -> Result<()> {
        if self.certificate_pem.trim().is_empty() {
            return Err(ProvisionError::GenerationIncomplete(
                "certificate PEM is empty".to_string(),
            ));
        }

        if self.private_key_pem.trim().is_empty() {
            return Err(ProvisionError::GenerationIncomplete(
                "private key PEM is empty".to_string(),
            ));
        }

        ensure_certificate_pem(&self.certificate_pem)?;
        ensure_private_key_pem(&self.private_key_pem)?;

        Ok(())
    }
}

/// Check that a PEM string holds an X.509 certificate.
fn ensure_certificate_pem(pem_str: &str) -> Result<()> {
    let mut cursor = Cursor::new(pem_str.as_bytes());

    match rustls_pemfile::read_one(&mut cursor)
        .map_err(|e| ProvisionError::PemError(format!("Failed to read PEM: {}", e)))?
    {
        Some(Item::X509Certificate(_)) => Ok(()),
        Some(_) => Err(ProvisionError::PemError(
            "PEM does not contain a certificate".to_string(),
        )),
        None => Err(ProvisionError::PemError(
            "No PEM block found in certificate material".to_string(),
        )),
    }
}

/// Check that a PEM string holds a private key.
fn ensure_private_key_pem(pem_str: &str) -> Result<()> {
    let mut cursor = Cursor::new(pem_str.as_bytes());

    match rustls_pemfile::read_one(&mut cursor)
        .map_err(|e| ProvisionError::PemError(format!("Failed to read PEM: {}", e)))?
    {
        Some(Item::Pkcs8Key(_)) | Some(Item::Pkcs1Key(_)) => Ok(()),
        Some(_) => Err(ProvisionError::PemError(
            "PEM does not contain a private key".to_string(),
        )),
        None => Err(ProvisionError::PemError(
            "No PEM block found in key material".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_material() -> CertificateMaterial {
        // A throwaway self-signed certificate; the checks only care about
        // PEM structure, not the key algorithm.
        let cert =
            rcgen::Certificate::from_params(rcgen::CertificateParams::new(vec![
                "localhost".to_string(),
            ]))
            .unwrap();

        CertificateMaterial {
            certificate_pem: cert.serialize_pem().unwrap(),
            private_key_pem: cert.serialize_private_key_pem(),
            public_key_pem: None,
        }
    }

    #[test]
    fn test_complete_material_accepted() {
        let material = sample_material();
        assert!(material.ensure_complete().is_ok());
    }

    #[test]
    fn test_empty_certificate_rejected() {
        let mut material = sample_material();
        material.certificate_pem = String::new();

        let result = material.ensure_complete();
        assert!(matches!(
            result,
            Err(ProvisionError::GenerationIncomplete(_))
        ));
    }

    #[test]
    fn test_empty_private_key_rejected() {
        let mut material = sample_material();
        material.private_key_pem = "   ".to_string();

        let result = material.ensure_complete();
        assert!(matches!(
            result,
            Err(ProvisionError::GenerationIncomplete(_))
        ));
    }

    #[test]
    fn test_malformed_certificate_rejected() {
        let mut material = sample_material();
        material.certificate_pem = "not a pem block".to_string();

        let result = material.ensure_complete();
        assert!(matches!(result, Err(ProvisionError::PemError(_))));
    }

    #[test]
    fn test_swapped_fields_rejected() {
        let material = sample_material();
        let swapped = CertificateMaterial {
            certificate_pem: material.private_key_pem.clone(),
            private_key_pem: material.certificate_pem.clone(),
            public_key_pem: None,
        };

        let result = swapped.ensure_complete();
        assert!(matches!(result, Err(ProvisionError::PemError(_))));
    }
}
