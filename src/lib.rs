//! sigid: sign short messages with a persistent RSA identity.
//!
//! This library signs a text input with an RSA-2048 key that is generated
//! once and persisted on disk, so that repeated invocations verify under
//! the same identity. It provides:
//!
//! - A keystore that loads the persistent key, generating it on first use
//! - SHA-256 PKCS#1 v1.5 signing of an input string
//! - A self-describing signed record carrying the message, its Base64
//!   signature, and the PEM-encoded public key
//!
//! # Architecture
//!
//! The library is composed of small, testable functions. All operations
//! return `Result` types with comprehensive error handling - no `unwrap()`
//! or panic outside tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use sigid::error::Result;
//! use sigid::signer::sign;
//! use sigid::storage::keystore::KeyStore;
//!
//! fn example() -> Result<()> {
//!     let keypair = KeyStore::new("var/data").load()?;
//!     let record = sign("theAnswerIs42", &keypair)?;
//!     println!("{}", serde_json::to_string(&record)?);
//!     Ok(())
//! }
//! ```

pub mod crypto;
pub mod error;
pub mod signer;
pub mod storage;

// Re-export commonly used types
pub use error::{Result, SigidError};
pub use signer::SignedRecord;
