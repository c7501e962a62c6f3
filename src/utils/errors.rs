// src/utils/errors.rs
//! Error types for the travel rule PII encryption client.
//!
//! Two kinds of failure reach the caller:
//! - [`TravelRuleError::MissingConfiguration`], raised synchronously when the
//!   adapter is constructed from an incomplete configuration
//! - [`TravelRuleError::PiiEncryptionFailed`], raised when the per-call agent
//!   runtime or the external toolset rejects an encode operation
//!
//! Component-level errors ([`AgentError`], [`ToolsetError`]) are serializable
//! so the wrapping failure can carry a structured snapshot of the underlying
//! error alongside its display text.

use serde::Serialize;
use thiserror::Error;

/// Top-level error surfaced by the encryption adapter.
#[derive(Debug, Error)]
pub enum TravelRuleError {
    /// One or more required configuration fields were absent at construction.
    /// The message lists every missing field, not just the first.
    #[error("Missing configuration fields: {}", .0.join(", "))]
    MissingConfiguration(Vec<String>),

    /// Agent initialization, key import, or field generation failed.
    /// `details` is a JSON snapshot of the source error, preserved so
    /// diagnostics from the external dependency are not lost.
    #[error("Failed to generate PII fields error: {message}. Details: {details}")]
    PiiEncryptionFailed { message: String, details: String },
}

impl TravelRuleError {
    /// Wraps a component error into a `PiiEncryptionFailed`, embedding both
    /// its display text and its serialized form.
    pub fn pii_encryption_failed<E>(source: &E) -> Self
    where
        E: std::error::Error + Serialize,
    {
        TravelRuleError::PiiEncryptionFailed {
            message: source.to_string(),
            details: serde_json::to_string(source).unwrap_or_else(|_| "{}".to_string()),
        }
    }
}

/// Errors raised by the identity-agent runtime.
#[derive(Debug, Clone, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AgentError {
    /// The runtime was initialized with an empty KMS secret key.
    #[error("agent runtime requires a non-empty KMS secret key")]
    MissingKmsSecret,

    /// Imported key material carried no DID identifier.
    #[error("DID key material has no DID identifier")]
    MissingDid,

    /// Imported key material carried no usable private key.
    #[error("DID key material for {did} has no private key")]
    MissingPrivateKey { did: String },

    /// Private key bytes could not be decoded into a secp256k1 key.
    #[error("invalid private key for {did}: {reason}")]
    InvalidPrivateKey { did: String, reason: String },

    /// A signing request referenced a DID with no imported key material.
    #[error("no key material imported for {did}")]
    UnknownDid { did: String },
}

/// Errors raised by the PII toolset client.
#[derive(Debug, Clone, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolsetError {
    /// The OAuth token endpoint rejected the client credentials.
    #[error("authentication with PII service failed: HTTP {status}: {body}")]
    AuthenticationFailed { status: u16, body: String },

    /// The PII service answered the encode request with a non-2xx status.
    #[error("PII service request failed: HTTP {status}: {body}")]
    ServiceError { status: u16, body: String },

    /// The request never produced an HTTP response (DNS, connect, TLS...).
    #[error("transport error calling PII service: {0}")]
    Transport(String),

    /// A request body could not be serialized.
    #[error("could not encode PII service request: {0}")]
    InvalidRequest(String),

    /// A response body could not be decoded into the expected shape.
    #[error("could not decode PII service response: {0}")]
    InvalidResponse(String),

    /// The agent handed to the toolset was seeded with a different KMS
    /// secret than the toolset was configured with.
    #[error("agent KMS secret does not match toolset configuration")]
    KmsSecretMismatch,

    /// The agent failed while signing the request on the sender's behalf.
    #[error(transparent)]
    Agent(#[from] AgentError),
}

/// Union of the failures that can interrupt a single encode call, kept
/// serializable so the top-level error can dump the source structurally.
#[derive(Debug, Clone, Error, Serialize)]
#[serde(tag = "type", content = "error", rename_all = "camelCase")]
pub enum EncodeError {
    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Toolset(#[from] ToolsetError),

    /// The configured serialized DID key could not be parsed.
    #[error("invalid DID key material: {0}")]
    InvalidDidKey(String),
}
