// src/models/transaction.rs
//! Transaction and travel rule message data models.
//!
//! A transaction arrives from the surrounding system carrying a travel rule
//! message whose `originator` and `beneficiary` fields hold party PII —
//! plaintext before encoding, opaque encrypted structures after. The models
//! here keep both states in the same shape by treating party data as raw
//! JSON values, and flatten everything they do not interpret into a
//! passthrough map so unrelated fields survive untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The PII payload handed to the encryption toolset: originator and
/// beneficiary party descriptions (typically IVMS 101 person records).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PiiData {
    pub originator: Value,
    pub beneficiary: Value,
}

/// Travel rule message accompanying a transaction.
///
/// Only `originator` and `beneficiary` are ever mutated by this crate; the
/// VASP DIDs and any flattened extra fields pass through unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TravelRuleMessage {
    /// Originator party description; replaced with its encrypted form by a
    /// successful encode.
    pub originator: Value,

    /// Beneficiary party description; replaced with its encrypted form by a
    /// successful encode.
    pub beneficiary: Value,

    /// DID of the virtual asset service provider sending the transaction.
    #[serde(rename = "originatorVASPdid")]
    pub originator_vasp_did: String,

    /// DID of the virtual asset service provider receiving the transaction.
    #[serde(rename = "beneficiaryVASPdid")]
    pub beneficiary_vasp_did: String,

    /// Explicit PII payload. When present it takes precedence over the
    /// originator/beneficiary fields as the payload to encrypt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pii: Option<PiiData>,

    /// Message fields this crate does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Arguments describing a transaction submitted for travel rule processing.
///
/// Constructed upstream, mutated in place by the encryption adapter (the
/// message's party fields are replaced with encrypted forms), and consumed
/// downstream by the transaction submission path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionArguments {
    pub travel_rule_message: TravelRuleMessage,

    /// Transaction fields this crate does not interpret (asset, amounts,
    /// addresses, and so on).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trips_unknown_fields() {
        let raw = json!({
            "travelRuleMessage": {
                "originator": {"name": "Alice"},
                "beneficiary": {"name": "Bob"},
                "originatorVASPdid": "did:ethr:0xaaa",
                "beneficiaryVASPdid": "did:ethr:0xbbb",
                "transactionAsset": "BTC"
            },
            "sourceAddress": "bc1qsender",
            "amount": "0.5"
        });

        let parsed: TransactionArguments = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(parsed.extra.get("amount"), Some(&json!("0.5")));
        assert_eq!(
            parsed.travel_rule_message.extra.get("transactionAsset"),
            Some(&json!("BTC"))
        );

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_pii_field_optional_and_omitted_when_absent() {
        let message = TravelRuleMessage {
            originator: json!({"name": "Alice"}),
            beneficiary: json!({"name": "Bob"}),
            originator_vasp_did: "did:ethr:0xaaa".to_string(),
            beneficiary_vasp_did: "did:ethr:0xbbb".to_string(),
            pii: None,
            extra: Map::new(),
        };
        let value = serde_json::to_value(&message).unwrap();
        assert!(value.get("pii").is_none());
    }
}
