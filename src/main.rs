//! sigid CLI application.
//!
//! This binary signs a short message with the persistent RSA identity and
//! prints the signed record as JSON.

use clap::Parser;
use sigid::error::{Result, SigidError};
use sigid::signer::sign;
use sigid::storage::keystore::KeyStore;
use std::path::PathBuf;
use std::process::ExitCode;

/// Maximum accepted message length, in bytes.
const MAX_MESSAGE_BYTES: usize = 250;

// Exit codes: 0 success, 1 internal error, 2 user-input error.
const EXIT_INTERNAL: u8 = 1;
const EXIT_USAGE: u8 = 2;

#[derive(Parser)]
#[command(name = "sigid")]
#[command(about = "Sign a short message with a persistent RSA identity", long_about = None)]
struct Cli {
    /// Message to sign (at most 250 bytes)
    message: String,

    /// Key storage directory (default: <executable dir>/var/data)
    #[arg(long)]
    store: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err @ SigidError::InvalidInputError(_)) => {
            eprintln!("Error: {}", err);
            ExitCode::from(EXIT_USAGE)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(EXIT_INTERNAL)
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    validate_message(&cli.message)?;

    let root = match cli.store {
        Some(path) => path,
        None => default_store_root()?,
    };

    let keypair = KeyStore::new(root).load()?;
    let record = sign(&cli.message, &keypair)?;

    Ok(serde_json::to_string(&record)?)
}

/// Reject empty or oversized messages before any key material is touched.
fn validate_message(message: &str) -> Result<()> {
    if message.is_empty() {
        return Err(SigidError::InvalidInputError(
            "message must not be empty".to_string(),
        ));
    }
    if message.len() > MAX_MESSAGE_BYTES {
        return Err(SigidError::InvalidInputError(format!(
            "message must be at most {} bytes, got {}",
            MAX_MESSAGE_BYTES,
            message.len()
        )));
    }
    Ok(())
}

/// Default storage root: `var/data` next to the running executable.
fn default_store_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe_dir = exe.parent().ok_or_else(|| {
        SigidError::StorageError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "executable has no parent directory",
        ))
    })?;
    Ok(exe_dir.join("var").join("data"))
}
