// src/services/pii_encryption.rs
//! PII Encryption Service
//!
//! This module provides the encryption adapter that prepares a transaction's
//! travel rule message for transmission: it validates the service
//! configuration once at construction, then exposes a single transform
//! operation that replaces the message's plaintext originator/beneficiary
//! fields with encrypted structures produced by the external PII toolset.
//!
//! The adapter delegates everything cryptographic:
//! - field generation to the [`PiiToolset`] (HTTP client by default),
//! - key management and signing to a per-call [`AgentRuntime`].

use crate::agent::{init_agent, AgentRuntime};
use crate::config::{TravelRuleConfig, ValidatedConfig};
use crate::models::did::DidKeyMaterial;
use crate::models::transaction::{PiiData, TransactionArguments};
use crate::toolset::{
    GeneratePiiRequest, PiiEncryptionMethod, PiiFields, PiiToolset, PiiToolsetClient,
    ToolsetOptions,
};
use crate::utils::errors::{EncodeError, TravelRuleError};
use std::sync::Arc;

/// Encryption adapter wrapping the external PII toolset.
///
/// Immutable after construction: the validated configuration and the toolset
/// instance are safe to share across concurrent encode calls. Each call
/// builds its own agent runtime; no state persists between calls.
pub struct PiiEncryption {
    config: ValidatedConfig,
    toolset: Arc<dyn PiiToolset>,
}

impl std::fmt::Debug for PiiEncryption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PiiEncryption")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PiiEncryption {
    /// Creates a new encryption adapter from a configuration record.
    ///
    /// Validates that every required field is present and builds the
    /// HTTP-backed toolset client from the validated fields.
    ///
    /// # Errors
    /// [`TravelRuleError::MissingConfiguration`] naming every absent field.
    pub fn new(config: TravelRuleConfig) -> Result<Self, TravelRuleError> {
        let config = config.validate()?;
        let toolset = PiiToolsetClient::new(ToolsetOptions {
            kms_secret_key: config.kms_secret_key.clone(),
            pii_url: config.base_url_pii.clone(),
            audience: config.audience_pii.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            auth_url: config.auth_url.clone(),
        });

        Ok(PiiEncryption {
            config,
            toolset: Arc::new(toolset),
        })
    }

    /// Creates an adapter with an injected toolset implementation.
    ///
    /// Configuration validation is identical to [`PiiEncryption::new`]; only
    /// the toolset construction is skipped. Intended for substituting test
    /// doubles at the toolset seam.
    pub fn with_toolset(
        config: TravelRuleConfig,
        toolset: Arc<dyn PiiToolset>,
    ) -> Result<Self, TravelRuleError> {
        let config = config.validate()?;
        Ok(PiiEncryption { config, toolset })
    }

    /// Encrypts the transaction's originator and beneficiary PII in place
    /// using the hybrid encryption method.
    ///
    /// # Process Flow
    /// 1. Use the message's explicit `pii` payload if present, otherwise
    ///    synthesize one from its originator/beneficiary fields
    /// 2. Resolve the optional counterparty DID key from configuration
    /// 3. Initialize a fresh agent runtime seeded with the KMS secret
    /// 4. Import the configured DID key material into that agent
    /// 5. Call the toolset's field generation with the payload, both VASP
    ///    DIDs, the agent, and the sender DID from the key material
    ///
    /// On success the message's `originator` and `beneficiary` fields are
    /// overwritten with the encrypted results; no other field changes. On
    /// failure the transaction is left untouched.
    ///
    /// Calling this twice re-encrypts already-encrypted fields; no guard is
    /// in place against double encoding.
    ///
    /// # Errors
    /// [`TravelRuleError::PiiEncryptionFailed`] carrying the source error's
    /// message and a serialized snapshot of it.
    pub async fn hybrid_encode(
        &self,
        transaction: &mut TransactionArguments,
    ) -> Result<(), TravelRuleError> {
        let message = &transaction.travel_rule_message;
        let pii = message.pii.clone().unwrap_or_else(|| PiiData {
            originator: message.originator.clone(),
            beneficiary: message.beneficiary.clone(),
        });
        let counterparty_did_key = self.config.json_beneficiary_did_key.clone();
        let originator_vasp_did = message.originator_vasp_did.clone();
        let beneficiary_vasp_did = message.beneficiary_vasp_did.clone();

        let fields = self
            .generate_encrypted_fields(pii, originator_vasp_did, beneficiary_vasp_did, counterparty_did_key)
            .await
            .map_err(|e| {
                log::warn!("PII field generation failed: {}", e);
                TravelRuleError::pii_encryption_failed(&e)
            })?;

        log::info!(
            "encrypted travel rule PII for originator VASP {}",
            transaction.travel_rule_message.originator_vasp_did
        );
        transaction.travel_rule_message.originator = fields.originator;
        transaction.travel_rule_message.beneficiary = fields.beneficiary;
        Ok(())
    }

    /// Runs the fallible portion of an encode call: agent setup, key import,
    /// and delegation to the toolset. No transaction state is touched here.
    async fn generate_encrypted_fields(
        &self,
        pii: PiiData,
        originator_vasp_did: String,
        beneficiary_vasp_did: String,
        counterparty_did_key: Option<String>,
    ) -> Result<PiiFields, EncodeError> {
        let agent: AgentRuntime = init_agent(&self.config.kms_secret_key)?;

        let key_material: DidKeyMaterial = serde_json::from_str(&self.config.json_did_key)
            .map_err(|e| EncodeError::InvalidDidKey(e.to_string()))?;
        let sender_did_key = key_material.did.clone();

        agent.did_manager_import(key_material).await?;

        let request = GeneratePiiRequest {
            pii,
            originator_vasp_did,
            beneficiary_vasp_did,
            counterparty_did_key,
            sender_did_key,
            encryption_method: PiiEncryptionMethod::Hybrid,
        };
        let fields = self.toolset.generate_pii_field(request, &agent).await?;
        Ok(fields)
    }
}
