//! Storage module for key persistence.
//!
//! This module handles loading and persisting the RSA private key on disk.

pub mod keystore;
