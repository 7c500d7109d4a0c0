//! Certificate builder utilities.
//!
//! This module provides functional utilities for assembling the rcgen
//! parameters of a self-signed certificate.

use crate::crypto::rsa::Keypair;
use crate::error::{ProvisionError, Result};
use rcgen::{CertificateParams, DistinguishedName, DnType, KeyPair, SanType};
use std::net::IpAddr;
use std::time::Duration;
use time::OffsetDateTime;

/// Build a CN-only distinguished name for the certificate subject.
///
/// # Example
///
/// ```
/// use certprov::cert::builder::common_name_dn;
///
/// let dn = common_name_dn("localhost").unwrap();
/// ```
pub fn common_name_dn(common_name: &str) -> Result<DistinguishedName> {
    if common_name.trim().is_empty() {
        return Err(ProvisionError::InvalidConfig(
            "Common name cannot be empty".to_string(),
        ));
    }

    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, common_name);
    Ok(dn)
}

/// Classify subject alternative names into rcgen SAN entries.
///
/// Entries that parse as an IP address become IP SANs; everything else is
/// treated as a DNS name. Order is preserved.
///
/// # Example
///
/// ```
/// use certprov::cert::builder::san_entries;
///
/// let sans = san_entries(&["127.0.0.1".to_string(), "localhost".to_string()]).unwrap();
/// assert_eq!(sans.len(), 2);
/// ```
pub fn san_entries(names: &[String]) -> Result<Vec<SanType>> {
    let mut entries = Vec::with_capacity(names.len());

    for name in names {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProvisionError::InvalidConfig(
                "Subject alternative name cannot be empty".to_string(),
            ));
        }

        match name.parse::<IpAddr>() {
            Ok(addr) => entries.push(SanType::IpAddress(addr)),
            Err(_) => entries.push(SanType::DnsName(name.to_string())),
        }
    }

    Ok(entries)
}

/// Set the validity window for a certificate, starting now.
pub fn set_validity(params: &mut CertificateParams, days: u32) {
    let duration = Duration::from_secs((days as u64) * 24 * 60 * 60);
    params.not_before = OffsetDateTime::now_utc();
    params.not_after = params.not_before + duration;
}

/// Convert an RSA keypair to an rcgen KeyPair.
///
/// rcgen does not generate RSA keys itself; it signs with an existing key
/// handed over in PKCS#8 form.
pub fn keypair_to_rcgen(keypair: &Keypair) -> Result<KeyPair> {
    let keypair_pem = keypair.private_key_pem()?;

    KeyPair::from_pem(&keypair_pem)
        .map_err(|e| ProvisionError::GenerationFailed(format!("Failed to convert keypair: {}", e)))
}
