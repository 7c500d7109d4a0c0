//! Provisioning configuration.
//!
//! Collects the recognized options with their documented defaults and
//! assembles the ordered subject-alternative-name list. The two historical
//! provisioning variants (with and without IP SANs) are unified behind the
//! `include_ip_sans` flag.

use crate::cert::request::{CertificateRequest, SignatureAlgorithm};
use crate::error::Result;
use std::path::PathBuf;

/// Default certificate subject common name.
pub const DEFAULT_COMMON_NAME: &str = "localhost";

/// Default RSA key size in bits.
pub const DEFAULT_KEY_SIZE_BITS: usize = 4096;

/// Default validity period in days.
pub const DEFAULT_VALIDITY_DAYS: u32 = 365;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "ssl";

/// Certificate output filename.
pub const CERT_FILENAME: &str = "server.crt";

/// Private key output filename.
pub const KEY_FILENAME: &str = "server.key";

/// Configuration for one provisioning run.
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    /// Certificate subject common name.
    pub common_name: String,

    /// Validity period in days.
    pub validity_days: u32,

    /// RSA key size in bits.
    pub key_size_bits: usize,

    /// Signature algorithm.
    pub signature_algorithm: SignatureAlgorithm,

    /// Whether to embed the IP subject-alternative-name set. When false the
    /// certificate only covers the common name.
    pub include_ip_sans: bool,

    /// Local network IP to append to the SAN list (from `LOCAL_IP`).
    pub local_ip: Option<String>,

    /// Public IP to append to the SAN list (from `PUBLIC_IP`).
    pub public_ip: Option<String>,

    /// Directory receiving `server.crt` and `server.key`.
    pub output_dir: PathBuf,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            common_name: DEFAULT_COMMON_NAME.to_string(),
            validity_days: DEFAULT_VALIDITY_DAYS,
            key_size_bits: DEFAULT_KEY_SIZE_BITS,
            signature_algorithm: SignatureAlgorithm::default(),
            include_ip_sans: true,
            local_ip: None,
            public_ip: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl ProvisionConfig {
    /// The ordered subject-alternative-name list for this configuration.
    ///
    /// With IP SANs enabled the list starts with `127.0.0.1` and
    /// `localhost`, followed by the local and public IPs when configured.
    /// No deployment-specific fallback addresses are baked in; absent IPs
    /// are simply omitted.
    ///
    /// # Example
    ///
    /// ```
    /// use certprov::config::ProvisionConfig;
    ///
    /// let config = ProvisionConfig::default();
    /// assert_eq!(config.subject_alt_names(), vec!["127.0.0.1", "localhost"]);
    /// ```
    pub fn subject_alt_names(&self) -> Vec<String> {
        if !self.include_ip_sans {
            return vec![self.common_name.clone()];
        }

        let mut names = vec!["127.0.0.1".to_string(), "localhost".to_string()];
        if let Some(ip) = &self.local_ip {
            names.push(ip.clone());
        }
        if let Some(ip) = &self.public_ip {
            names.push(ip.clone());
        }
        names
    }

    /// Build the immutable certificate request for this configuration.
    pub fn to_request(&self) -> Result<CertificateRequest> {
        CertificateRequest::new(
            self.common_name.clone(),
            self.validity_days,
            self.key_size_bits,
            self.signature_algorithm,
            self.subject_alt_names(),
        )
    }
}
