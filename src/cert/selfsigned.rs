//! Self-signed certificate generation.
//!
//! The [`CertificateGenerator`] trait is the seam to the external
//! generation capability: the provisioning flow only ever talks to the
//! trait, so tests can substitute a fake. [`RcgenGenerator`] is the
//! production implementation backed by rcgen.

use crate::cert::builder::{common_name_dn, keypair_to_rcgen, san_entries, set_validity};
use crate::cert::material::CertificateMaterial;
use crate::cert::request::CertificateRequest;
use crate::crypto::rsa::generate_rsa_keypair;
use crate::error::{ProvisionError, Result};
use rcgen::{Certificate, CertificateParams, IsCa};

/// A capability that turns a [`CertificateRequest`] into PEM material.
pub trait CertificateGenerator {
    /// Generate a certificate and key pair for the request.
    ///
    /// Returns fully populated material or fails; partial output is not a
    /// valid result of this call.
    fn generate(&self, request: &CertificateRequest) -> Result<CertificateMaterial>;
}

/// rcgen-backed generator producing an RSA key and a self-signed
/// server certificate.
pub struct RcgenGenerator;

impl CertificateGenerator for RcgenGenerator {
    fn generate(&self, request: &CertificateRequest) -> Result<CertificateMaterial> {
        let keypair = generate_rsa_keypair(request.key_size_bits())?;
        let key_pair = keypair_to_rcgen(&keypair)?;

        let mut params = CertificateParams::default();
        params.distinguished_name = common_name_dn(request.common_name())?;
        params.subject_alt_names = san_entries(request.subject_alt_names())?;
        params.is_ca = IsCa::NoCa;
        params.key_usages = vec![
            rcgen::KeyUsagePurpose::DigitalSignature,
            rcgen::KeyUsagePurpose::KeyEncipherment,
        ];
        params.extended_key_usages = vec![rcgen::ExtendedKeyUsagePurpose::ServerAuth];
        params.alg = request.signature_algorithm().rcgen_alg();
        set_validity(&mut params, request.validity_days());
        params.key_pair = Some(key_pair);

        let cert = Certificate::from_params(params).map_err(|e| {
            ProvisionError::GenerationFailed(format!("Failed to create certificate: {}", e))
        })?;

        let certificate_pem = cert.serialize_pem().map_err(|e| {
            ProvisionError::GenerationFailed(format!("Failed to encode certificate: {}", e))
        })?;
        let private_key_pem = cert.serialize_private_key_pem();
        let public_key_pem = keypair.public_key_pem()?;

        Ok(CertificateMaterial {
            certificate_pem,
            private_key_pem,
            public_key_pem: Some(public_key_pem),
        })
    }
}
