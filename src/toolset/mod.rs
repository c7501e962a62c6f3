// src/toolset/mod.rs
//! External PII encryption toolset seam.
//!
//! The toolset performs the actual cryptography: given a PII payload and the
//! DIDs of both VASPs, it produces encrypted originator/beneficiary field
//! structures. This crate only orchestrates the call. The seam is a trait so
//! the HTTP-backed client can be swapped for a test double.

pub mod client;

pub use client::{PiiToolsetClient, ToolsetOptions};

use crate::agent::AgentRuntime;
use crate::models::transaction::PiiData;
use crate::utils::errors::ToolsetError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Encryption method selector understood by the PII service.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PiiEncryptionMethod {
    /// Asymmetric key exchange plus symmetric payload encryption. The only
    /// method this crate requests.
    #[serde(rename = "HYBRID")]
    Hybrid,

    /// End-to-end encryption directly against the counterparty key.
    #[serde(rename = "END_2_END")]
    End2End,
}

/// Arguments for a PII field-generation call.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePiiRequest {
    /// Payload to encrypt.
    pub pii: PiiData,

    #[serde(rename = "originatorVASPdid")]
    pub originator_vasp_did: String,

    #[serde(rename = "beneficiaryVASPdid")]
    pub beneficiary_vasp_did: String,

    /// Counterparty DID key, when one was configured.
    #[serde(rename = "counterpartyDIDKey", skip_serializing_if = "Option::is_none")]
    pub counterparty_did_key: Option<String>,

    /// DID of the sender, extracted from the configured key material.
    #[serde(rename = "senderDIDKey")]
    pub sender_did_key: String,

    pub encryption_method: PiiEncryptionMethod,
}

/// Encrypted field structures returned by the toolset; opaque to this crate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PiiFields {
    pub originator: Value,
    pub beneficiary: Value,
}

/// Capability interface over the external PII encryption toolset.
#[async_trait]
pub trait PiiToolset: Send + Sync {
    /// Generates encrypted originator/beneficiary field structures for the
    /// given request, signing on the sender's behalf through `agent`.
    async fn generate_pii_field(
        &self,
        request: GeneratePiiRequest,
        agent: &AgentRuntime,
    ) -> Result<PiiFields, ToolsetError>;
}
