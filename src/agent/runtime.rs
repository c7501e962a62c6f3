// src/agent/runtime.rs
//! Identity-agent runtime managing DID signing keys.
//!
//! A fresh runtime is created for every encode call, seeded with the KMS
//! secret key from configuration. The runtime holds imported DID key
//! material in memory and signs payloads on behalf of an imported DID so
//! the toolset client can prove control of the sender identity.
//!
//! Uses the following cryptographic primitives:
//! - secp256k1 curve (via `k256` crate)
//! - ECDSA signatures (RFC 6979 deterministic nonces)

use crate::models::did::DidKeyMaterial;
use crate::utils::errors::AgentError;
use k256::ecdsa::signature::Signer;
use k256::ecdsa::{Signature, SigningKey};
use k256::SecretKey;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Initializes a fresh agent runtime seeded with a KMS secret key.
///
/// # Errors
/// [`AgentError::MissingKmsSecret`] if the secret is empty.
pub fn init_agent(kms_secret_key: &str) -> Result<AgentRuntime, AgentError> {
    if kms_secret_key.is_empty() {
        return Err(AgentError::MissingKmsSecret);
    }
    Ok(AgentRuntime {
        kms_secret_key: kms_secret_key.to_string(),
        identifiers: Arc::new(Mutex::new(HashMap::new())),
    })
}

/// In-memory identity-agent runtime.
///
/// Holds the KMS secret it was seeded with and the key material imported
/// during its lifetime. Secret keys are parsed at import time and never
/// exposed outside the runtime.
#[derive(Clone, Debug)]
pub struct AgentRuntime {
    kms_secret_key: String,
    /// Imported identifiers keyed by DID.
    identifiers: Arc<Mutex<HashMap<String, ImportedIdentifier>>>,
}

#[derive(Debug)]
struct ImportedIdentifier {
    #[allow(dead_code)]
    material: DidKeyMaterial,
    signing_key: SigningKey,
}

impl AgentRuntime {
    /// Imports DID key material into the runtime.
    ///
    /// # Arguments
    /// * `material` - Parsed DID key document carrying at least one key with
    ///   private key material
    ///
    /// # Errors
    /// - [`AgentError::MissingDid`] if the document has no DID identifier
    /// - [`AgentError::MissingPrivateKey`] if no key carries a private key
    /// - [`AgentError::InvalidPrivateKey`] if the private key hex does not
    ///   decode into a valid secp256k1 secret key
    pub async fn did_manager_import(&self, material: DidKeyMaterial) -> Result<(), AgentError> {
        if material.did.is_empty() {
            return Err(AgentError::MissingDid);
        }

        let key = material
            .signing_key()
            .ok_or_else(|| AgentError::MissingPrivateKey {
                did: material.did.clone(),
            })?;
        let private_key_hex = key.private_key_hex.as_deref().unwrap_or_default();

        let bytes = hex::decode(private_key_hex).map_err(|e| AgentError::InvalidPrivateKey {
            did: material.did.clone(),
            reason: e.to_string(),
        })?;
        let secret_key =
            SecretKey::from_slice(&bytes).map_err(|e| AgentError::InvalidPrivateKey {
                did: material.did.clone(),
                reason: e.to_string(),
            })?;

        let mut identifiers = self.identifiers.lock().unwrap();
        identifiers.insert(
            material.did.clone(),
            ImportedIdentifier {
                signing_key: SigningKey::from(&secret_key),
                material,
            },
        );
        Ok(())
    }

    /// Signs a payload with the key imported for `did`.
    ///
    /// # Returns
    /// 64-byte compact ECDSA signature (R || S values)
    ///
    /// # Errors
    /// [`AgentError::UnknownDid`] if no key material was imported for `did`.
    pub async fn sign_payload(&self, did: &str, payload: &[u8]) -> Result<Vec<u8>, AgentError> {
        let identifiers = self.identifiers.lock().unwrap();
        let identifier = identifiers
            .get(did)
            .ok_or_else(|| AgentError::UnknownDid {
                did: did.to_string(),
            })?;

        let signature: Signature = identifier.signing_key.sign(payload);
        Ok(signature.to_vec())
    }

    /// Checks whether this runtime was seeded with the given KMS secret.
    pub fn kms_secret_matches(&self, kms_secret_key: &str) -> bool {
        self.kms_secret_key == kms_secret_key
    }

    /// Returns whether key material was imported for `did`.
    pub fn has_identifier(&self, did: &str) -> bool {
        let identifiers = self.identifiers.lock().unwrap();
        identifiers.contains_key(did)
    }
}
