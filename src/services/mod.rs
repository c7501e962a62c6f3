// src/services/mod.rs
//! Service layer: the PII encryption adapter.

pub mod pii_encryption;

pub use pii_encryption::PiiEncryption;
