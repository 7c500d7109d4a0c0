//! The provisioning flow.
//!
//! A single linear pass: ensure the output directory, build the request,
//! invoke the generation capability, validate the returned material, and
//! persist the certificate/key pair. Any failure aborts the run; nothing
//! is retried and partially written files are not rolled back.

use crate::cert::selfsigned::CertificateGenerator;
use crate::config::{ProvisionConfig, CERT_FILENAME, KEY_FILENAME};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// What a successful provisioning run produced.
#[derive(Debug)]
pub struct ProvisionOutcome {
    /// Path of the written certificate.
    pub certificate_path: PathBuf,

    /// Path of the written private key.
    pub private_key_path: PathBuf,

    /// Identities (IPs and hostnames) embedded in the certificate.
    pub identities: Vec<String>,

    /// Whether the output directory had to be created.
    pub created_directory: bool,
}

/// Provision a certificate/key pair according to `config`.
///
/// The generation capability is passed in explicitly so callers (and
/// tests) decide what produces the material. Material is validated before
/// anything is written; reruns overwrite the previous pair.
///
/// # Example
///
/// ```rust,no_run
/// use certprov::cert::selfsigned::RcgenGenerator;
/// use certprov::config::ProvisionConfig;
/// use certprov::provision::provision;
///
/// # fn example() -> certprov::error::Result<()> {
/// let outcome = provision(&ProvisionConfig::default(), &RcgenGenerator)?;
/// println!("Certificate: {}", outcome.certificate_path.display());
/// # Ok(())
/// # }
/// ```
pub fn provision(
    config: &ProvisionConfig,
    generator: &dyn CertificateGenerator,
) -> Result<ProvisionOutcome> {
    let created_directory = ensure_output_dir(&config.output_dir)?;

    let request = config.to_request()?;
    let material = generator.generate(&request)?;
    material.ensure_complete()?;

    let certificate_path = config.output_dir.join(CERT_FILENAME);
    let private_key_path = config.output_dir.join(KEY_FILENAME);

    fs::write(&certificate_path, &material.certificate_pem)?;
    fs::write(&private_key_path, &material.private_key_pem)?;

    Ok(ProvisionOutcome {
        certificate_path,
        private_key_path,
        identities: request.subject_alt_names().to_vec(),
        created_directory,
    })
}

/// Create the output directory if absent. Returns whether it was created.
fn ensure_output_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(dir)?;
    Ok(true)
}
