//! certprov CLI application.
//!
//! This binary provisions a self-signed TLS certificate and RSA key pair
//! and writes them into an output directory. It runs with no arguments;
//! every option has a default, and the IP options also read the `LOCAL_IP`
//! and `PUBLIC_IP` environment variables.

use certprov::cert::request::SignatureAlgorithm;
use certprov::cert::selfsigned::RcgenGenerator;
use certprov::config::{ProvisionConfig, DEFAULT_OUTPUT_DIR};
use certprov::error::Result;
use certprov::provision::provision;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "certprov")]
#[command(about = "Provision a self-signed TLS certificate for a local server", long_about = None)]
struct Cli {
    /// Certificate subject common name
    #[arg(long, default_value = "localhost")]
    common_name: String,

    /// Validity period in days
    #[arg(long, default_value_t = 365)]
    days: u32,

    /// RSA key size in bits
    #[arg(long, default_value_t = 4096)]
    key_size: usize,

    /// Signature digest: sha256, sha384, or sha512
    #[arg(long, default_value = "sha256")]
    algorithm: String,

    /// Local network IP to embed as a subject alternative name
    #[arg(long, env = "LOCAL_IP")]
    local_ip: Option<String>,

    /// Public IP to embed as a subject alternative name
    #[arg(long, env = "PUBLIC_IP")]
    public_ip: Option<String>,

    /// Only cover the common name; skip the IP subject-alternative-name set
    #[arg(long)]
    no_ip_sans: bool,

    /// Output directory for server.crt and server.key
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    out_dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Errors decide the exit code here and nowhere else.
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ProvisionConfig {
        common_name: cli.common_name,
        validity_days: cli.days,
        key_size_bits: cli.key_size,
        signature_algorithm: SignatureAlgorithm::from_name(&cli.algorithm)?,
        include_ip_sans: !cli.no_ip_sans,
        local_ip: cli.local_ip,
        public_ip: cli.public_ip,
        output_dir: cli.out_dir,
    };

    let outcome = provision(&config, &RcgenGenerator)?;

    if outcome.created_directory {
        println!("Created {} directory", config.output_dir.display());
    }

    println!("✓ SSL certificate generated successfully!");
    println!("  - {}", outcome.private_key_path.display());
    println!("  - {}", outcome.certificate_path.display());
    println!();
    println!("Certificate covers the following identities:");
    for identity in &outcome.identities {
        println!("  - {}", identity);
    }
    println!();
    println!("You can customize IPs by setting environment variables:");
    println!("  PUBLIC_IP=your.public.ip LOCAL_IP=your.local.ip certprov");

    Ok(())
}
