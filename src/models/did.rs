// src/models/did.rs
//! DID key material data model.
//!
//! The configuration carries the sender's signing identity as a serialized
//! JSON document (`jsonDidKey`). Parsed, it yields the DID identifier plus
//! the managed keys the identity-agent runtime imports.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A managed key inside a DID key-material document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManagedKey {
    /// Key identifier within the DID document.
    pub kid: String,

    /// Name of the key-management system holding the key (e.g. "local").
    pub kms: String,

    /// Key type, e.g. "Secp256k1".
    #[serde(rename = "type")]
    pub key_type: String,

    /// Hex-encoded public key.
    pub public_key_hex: String,

    /// Hex-encoded private key; absent for verification-only keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key_hex: Option<String>,
}

/// Parsed DID key material, as imported into the identity-agent runtime.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DidKeyMaterial {
    /// The complete DID string identifier
    /// Example: "did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK"
    pub did: String,

    /// Key identifier of the controlling key, when the document names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller_key_id: Option<String>,

    /// Keys managed under this DID.
    pub keys: Vec<ManagedKey>,

    /// Service endpoints attached to the DID; carried but not interpreted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Value>,
}

impl DidKeyMaterial {
    /// Returns the first key that carries private key material, if any.
    pub fn signing_key(&self) -> Option<&ManagedKey> {
        self.keys.iter().find(|key| key.private_key_hex.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_serialized_key_material() {
        let material: DidKeyMaterial = serde_json::from_str(
            r#"{
                "did": "did:key:z6MkTest",
                "controllerKeyId": "key-1",
                "keys": [{
                    "kid": "key-1",
                    "kms": "local",
                    "type": "Secp256k1",
                    "publicKeyHex": "04ab",
                    "privateKeyHex": "cd12"
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(material.did, "did:key:z6MkTest");
        assert_eq!(material.signing_key().unwrap().kid, "key-1");
    }

    #[test]
    fn test_signing_key_skips_public_only_keys() {
        let material: DidKeyMaterial = serde_json::from_str(
            r#"{
                "did": "did:key:z6MkTest",
                "keys": [
                    {"kid": "pub", "kms": "local", "type": "Secp256k1", "publicKeyHex": "04aa"},
                    {"kid": "priv", "kms": "local", "type": "Secp256k1", "publicKeyHex": "04bb", "privateKeyHex": "cc"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(material.signing_key().unwrap().kid, "priv");
    }
}
