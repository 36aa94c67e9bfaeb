//! Keystore implementation for the persistent signing key.
//!
//! This module provides a keystore that keeps a single RSA private key on
//! disk so that repeated invocations sign under the same identity.

use crate::crypto::rsa::{generate_rsa_keypair, RsaKeypair};
use crate::error::{Result, SigidError};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Filename of the persisted private key.
pub const PRIVATE_KEY_FILENAME: &str = "private.pem";

/// A keystore holding one RSA private key under a storage root directory.
///
/// The root is an explicit parameter; callers decide where key material
/// lives (the CLI defaults it to a directory next to the executable).
#[derive(Debug, Clone)]
pub struct KeyStore {
    root: PathBuf,
}

impl KeyStore {
    /// Create a keystore rooted at the given directory.
    ///
    /// The directory does not need to exist yet; it is created on the first
    /// `load` that generates a key.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the full path of the key file under this keystore's root.
    pub fn key_path(&self) -> PathBuf {
        self.root.join(PRIVATE_KEY_FILENAME)
    }

    /// Load the persistent keypair, generating and persisting one on first run.
    ///
    /// If the key file exists its contents must parse as a PKCS#1 PEM private
    /// key; anything else is an `InvalidKeyError` and the file is left
    /// untouched. If the file is absent, a fresh RSA-2048 key is generated and
    /// written with create-exclusive semantics: should a concurrent first run
    /// win the race, this call discards its own key and reloads the winner's,
    /// so all processes converge on a single identity.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use sigid::storage::keystore::KeyStore;
    ///
    /// # fn example() -> sigid::error::Result<()> {
    /// let keystore = KeyStore::new("var/data");
    /// let keypair = keystore.load()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(&self) -> Result<RsaKeypair> {
        let path = self.key_path();
        if path.exists() {
            return read_key(&path);
        }

        let keypair = generate_rsa_keypair()?;
        match self.persist(&keypair) {
            Ok(()) => Ok(keypair),
            // Another process created the file first; its key wins.
            Err(SigidError::StorageError(e)) if e.kind() == ErrorKind::AlreadyExists => {
                read_key(&path)
            }
            Err(e) => Err(e),
        }
    }

    /// Write the keypair to the key file, creating parent directories.
    ///
    /// Fails with `AlreadyExists` if the file is already present; the key
    /// file is never overwritten.
    fn persist(&self, keypair: &RsaKeypair) -> Result<()> {
        fs::create_dir_all(&self.root)?;

        let pem = keypair.to_pkcs1_pem()?;
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.key_path())?;
        file.write_all(pem.as_bytes())?;

        Ok(())
    }
}

/// Read and parse a private key from the given PEM file.
fn read_key(path: &Path) -> Result<RsaKeypair> {
    let contents = fs::read_to_string(path)?;
    RsaKeypair::from_pkcs1_pem(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_key_path() {
        let keystore = KeyStore::new("/some/root");
        assert_eq!(
            keystore.key_path(),
            Path::new("/some/root").join(PRIVATE_KEY_FILENAME)
        );
    }

    #[test]
    fn test_fresh_run_generates_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let keystore = KeyStore::new(temp_dir.path());

        let keypair = keystore.load().unwrap();

        // The key file must exist and parse back to the same key
        let on_disk = fs::read_to_string(keystore.key_path()).unwrap();
        let reloaded = RsaKeypair::from_pkcs1_pem(&on_disk).unwrap();
        assert_eq!(
            keypair.to_pkcs1_pem().unwrap(),
            reloaded.to_pkcs1_pem().unwrap()
        );
    }

    #[test]
    fn test_fresh_run_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("var").join("data");
        let keystore = KeyStore::new(&nested);

        keystore.load().unwrap();
        assert!(keystore.key_path().exists());
    }

    #[test]
    fn test_load_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let keystore = KeyStore::new(temp_dir.path());

        let keypair1 = keystore.load().unwrap();
        let keypair2 = keystore.load().unwrap();

        assert_eq!(
            keypair1.to_pkcs1_pem().unwrap(),
            keypair2.to_pkcs1_pem().unwrap()
        );
    }

    #[test]
    fn test_load_does_not_rewrite_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let keystore = KeyStore::new(temp_dir.path());

        keystore.load().unwrap();
        let before = fs::read_to_string(keystore.key_path()).unwrap();

        keystore.load().unwrap();
        let after = fs::read_to_string(keystore.key_path()).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn test_corrupt_key_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let keystore = KeyStore::new(temp_dir.path());

        fs::write(keystore.key_path(), "garbage, not a key").unwrap();
        let result = keystore.load();

        assert!(result.is_err());
        match result {
            Err(SigidError::InvalidKeyError(_)) => {}
            _ => panic!("Expected InvalidKeyError"),
        }

        // A corrupt file is never silently replaced
        let contents = fs::read_to_string(keystore.key_path()).unwrap();
        assert_eq!(contents, "garbage, not a key");
    }

    #[test]
    fn test_persist_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let keystore = KeyStore::new(temp_dir.path());

        let keypair1 = keystore.load().unwrap();
        let keypair2 = generate_rsa_keypair().unwrap();

        let result = keystore.persist(&keypair2);
        match result {
            Err(SigidError::StorageError(e)) => {
                assert_eq!(e.kind(), ErrorKind::AlreadyExists);
            }
            _ => panic!("Expected StorageError(AlreadyExists)"),
        }

        // The original key survives
        let reloaded = keystore.load().unwrap();
        assert_eq!(
            keypair1.to_pkcs1_pem().unwrap(),
            reloaded.to_pkcs1_pem().unwrap()
        );
    }
}
