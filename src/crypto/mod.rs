//! Cryptographic operations module.
//!
//! This module provides the cryptographic primitives for sigid:
//!
//! - RSA-2048 key generation and PEM encoding
//! - SHA-256 PKCS#1 v1.5 signing and verification
//!
//! All operations return `Result` types with comprehensive error handling.

pub mod rsa;
