//! Certificate request parameters.
//!
//! A [`CertificateRequest`] captures everything the generation capability
//! needs: subject, validity, key size, signature algorithm, and the ordered
//! subject alternative names. It is immutable once constructed and
//! construction validates all invariants.

use crate::crypto::rsa::MIN_KEY_SIZE_BITS;
use crate::error::{ProvisionError, Result};

/// Signature algorithm for the self-signed certificate.
///
/// All variants are RSA signatures with PKCS#1 v1.5 padding; the variant
/// selects the digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureAlgorithm {
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl SignatureAlgorithm {
    /// Parse an algorithm from its lowercase digest name.
    ///
    /// # Example
    ///
    /// ```
    /// use certprov::cert::request::SignatureAlgorithm;
    ///
    /// let alg = SignatureAlgorithm::from_name("sha256").unwrap();
    /// assert_eq!(alg, SignatureAlgorithm::Sha256);
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "sha256" => Ok(SignatureAlgorithm::Sha256),
            "sha384" => Ok(SignatureAlgorithm::Sha384),
            "sha512" => Ok(SignatureAlgorithm::Sha512),
            _ => Err(ProvisionError::InvalidConfig(format!(
                "Unsupported signature algorithm: '{}'. Use 'sha256', 'sha384', or 'sha512'",
                name
            ))),
        }
    }

    /// The digest name, as accepted by [`SignatureAlgorithm::from_name`].
    pub fn name(&self) -> &'static str {
        match self {
            SignatureAlgorithm::Sha256 => "sha256",
            SignatureAlgorithm::Sha384 => "sha384",
            SignatureAlgorithm::Sha512 => "sha512",
        }
    }

    /// The rcgen signing algorithm for this variant.
    pub(crate) fn rcgen_alg(&self) -> &'static rcgen::SignatureAlgorithm {
        match self {
            SignatureAlgorithm::Sha256 => &rcgen::PKCS_RSA_SHA256,
            SignatureAlgorithm::Sha384 => &rcgen::PKCS_RSA_SHA384,
            SignatureAlgorithm::Sha512 => &rcgen::PKCS_RSA_SHA512,
        }
    }
}

/// Validated, immutable input to the certificate generation capability.
#[derive(Debug, Clone)]
pub struct CertificateRequest {
    common_name: String,
    validity_days: u32,
    key_size_bits: usize,
    signature_algorithm: SignatureAlgorithm,
    subject_alt_names: Vec<String>,
}

impl CertificateRequest {
    /// Build a request, validating all fields.
    ///
    /// # Example
    ///
    /// ```
    /// use certprov::cert::request::{CertificateRequest, SignatureAlgorithm};
    ///
    /// let request = CertificateRequest::new(
    ///     "localhost".to_string(),
    ///     365,
    ///     4096,
    ///     SignatureAlgorithm::Sha256,
    ///     vec!["127.0.0.1".to_string(), "localhost".to_string()],
    /// )
    /// .unwrap();
    /// assert_eq!(request.common_name(), "localhost");
    /// ```
    pub fn new(
        common_name: String,
        validity_days: u32,
        key_size_bits: usize,
        signature_algorithm: SignatureAlgorithm,
        subject_alt_names: Vec<String>,
    ) -> Result<Self> {
        if common_name.trim().is_empty() {
            return Err(ProvisionError::InvalidConfig(
                "Common name cannot be empty".to_string(),
            ));
        }

        if validity_days == 0 {
            return Err(ProvisionError::InvalidConfig(
                "Validity period must be at least 1 day".to_string(),
            ));
        }

        if key_size_bits < MIN_KEY_SIZE_BITS {
            return Err(ProvisionError::InvalidConfig(format!(
                "Key size must be at least {} bits, got {}",
                MIN_KEY_SIZE_BITS, key_size_bits
            )));
        }

        if subject_alt_names.iter().any(|name| name.trim().is_empty()) {
            return Err(ProvisionError::InvalidConfig(
                "Subject alternative names cannot contain empty entries".to_string(),
            ));
        }

        Ok(Self {
            common_name,
            validity_days,
            key_size_bits,
            signature_algorithm,
            subject_alt_names,
        })
    }

    /// Certificate subject common name.
    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    /// Validity period in days, counted from generation time.
    pub fn validity_days(&self) -> u32 {
        self.validity_days
    }

    /// RSA key size in bits.
    pub fn key_size_bits(&self) -> usize {
        self.key_size_bits
    }

    /// Signature algorithm.
    pub fn signature_algorithm(&self) -> SignatureAlgorithm {
        self.signature_algorithm
    }

    /// Ordered subject alternative names (IPs and DNS names).
    pub fn subject_alt_names(&self) -> &[String] {
        &self.subject_alt_names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with(
        common_name: &str,
        validity_days: u32,
        key_size_bits: usize,
    ) -> Result<CertificateRequest> {
        CertificateRequest::new(
            common_name.to_string(),
            validity_days,
            key_size_bits,
            SignatureAlgorithm::Sha256,
            vec!["127.0.0.1".to_string(), "localhost".to_string()],
        )
    }

    #[test]
    fn test_algorithm_from_name() {
        assert_eq!(
            SignatureAlgorithm::from_name("sha256").unwrap(),
            SignatureAlgorithm::Sha256
        );
        assert_eq!(
            SignatureAlgorithm::from_name("SHA384").unwrap(),
            SignatureAlgorithm::Sha384
        );
        assert_eq!(
            SignatureAlgorithm::from_name("sha512").unwrap(),
            SignatureAlgorithm::Sha512
        );
    }

    #[test]
    fn test_algorithm_from_name_unknown() {
        let result = SignatureAlgorithm::from_name("md5");
        assert!(matches!(result, Err(ProvisionError::InvalidConfig(_))));
    }

    #[test]
    fn test_algorithm_name_roundtrip() {
        for alg in [
            SignatureAlgorithm::Sha256,
            SignatureAlgorithm::Sha384,
            SignatureAlgorithm::Sha512,
        ] {
            assert_eq!(SignatureAlgorithm::from_name(alg.name()).unwrap(), alg);
        }
    }

    #[test]
    fn test_default_algorithm_is_sha256() {
        assert_eq!(SignatureAlgorithm::default(), SignatureAlgorithm::Sha256);
    }

    #[test]
    fn test_request_valid() {
        let request = request_with("localhost", 365, 4096).unwrap();
        assert_eq!(request.common_name(), "localhost");
        assert_eq!(request.validity_days(), 365);
        assert_eq!(request.key_size_bits(), 4096);
        assert_eq!(
            request.subject_alt_names(),
            &["127.0.0.1".to_string(), "localhost".to_string()]
        );
    }

    #[test]
    fn test_request_empty_common_name() {
        let result = request_with("  ", 365, 4096);
        assert!(matches!(result, Err(ProvisionError::InvalidConfig(_))));
    }

    #[test]
    fn test_request_zero_validity() {
        let result = request_with("localhost", 0, 4096);
        assert!(matches!(result, Err(ProvisionError::InvalidConfig(_))));
    }

    #[test]
    fn test_request_short_key() {
        let result = request_with("localhost", 365, 1024);
        assert!(matches!(result, Err(ProvisionError::InvalidConfig(_))));
    }

    #[test]
    fn test_request_empty_san_entry() {
        let result = CertificateRequest::new(
            "localhost".to_string(),
            365,
            4096,
            SignatureAlgorithm::Sha256,
            vec!["127.0.0.1".to_string(), "".to_string()],
        );
        assert!(matches!(result, Err(ProvisionError::InvalidConfig(_))));
    }

    #[test]
    fn test_request_empty_san_list_allowed() {
        let result = CertificateRequest::new(
            "localhost".to_string(),
            365,
            4096,
            SignatureAlgorithm::Sha256,
            Vec::new(),
        );
        assert!(result.is_ok());
    }
}
