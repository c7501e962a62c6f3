// src/toolset/client.rs
//! HTTP client for the external PII encryption service.
//!
//! The client authenticates with OAuth client credentials, has the agent
//! runtime sign a digest of the request to prove control of the sender DID,
//! and posts the field-generation request to the PII service. All
//! cryptographic field generation happens service-side; the client only
//! carries the payload there and back.

use crate::agent::AgentRuntime;
use crate::toolset::{GeneratePiiRequest, PiiFields, PiiToolset};
use crate::utils::errors::ToolsetError;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Construction options for the toolset client, mirroring the configuration
/// fields the adapter passes through.
#[derive(Debug, Clone)]
pub struct ToolsetOptions {
    pub kms_secret_key: String,
    pub pii_url: String,
    pub audience: String,
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: String,
}

/// HTTP-backed PII toolset client.
///
/// Immutable after construction; safe to share across concurrent encode
/// calls (the underlying `reqwest::Client` pools connections internally).
pub struct PiiToolsetClient {
    http: reqwest::Client,
    options: ToolsetOptions,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    client_secret: &'a str,
    audience: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Digest of the fields the sender vouches for, signed by the agent.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignedDigest<'a> {
    pii: &'a crate::models::transaction::PiiData,
    #[serde(rename = "originatorVASPdid")]
    originator_vasp_did: &'a str,
    #[serde(rename = "beneficiaryVASPdid")]
    beneficiary_vasp_did: &'a str,
    issued_at: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SenderProof {
    did: String,
    issued_at: String,
    /// Base64-encoded compact ECDSA signature over the canonical digest.
    signature: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EncodeRequestBody {
    #[serde(flatten)]
    request: GeneratePiiRequest,
    proof: SenderProof,
}

impl PiiToolsetClient {
    /// Creates a new toolset client. Performs no I/O; credentials are only
    /// exercised when a field-generation call runs.
    pub fn new(options: ToolsetOptions) -> Self {
        PiiToolsetClient {
            http: reqwest::Client::new(),
            options,
        }
    }

    fn endpoint(base: &str, path: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), path)
    }

    /// Obtains a bearer token from the OAuth token endpoint using the
    /// client-credentials grant.
    async fn authenticate(&self) -> Result<String, ToolsetError> {
        let url = Self::endpoint(&self.options.auth_url, "oauth/token");
        log::debug!("requesting PII service access token from {}", url);

        let response = self
            .http
            .post(&url)
            .json(&TokenRequest {
                grant_type: "client_credentials",
                client_id: &self.options.client_id,
                client_secret: &self.options.client_secret,
                audience: &self.options.audience,
            })
            .send()
            .await
            .map_err(|e| ToolsetError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ToolsetError::AuthenticationFailed {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| ToolsetError::InvalidResponse(e.to_string()))?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl PiiToolset for PiiToolsetClient {
    async fn generate_pii_field(
        &self,
        request: GeneratePiiRequest,
        agent: &AgentRuntime,
    ) -> Result<PiiFields, ToolsetError> {
        // The agent must have been seeded with the same KMS secret this
        // toolset was configured with, otherwise its signatures reference
        // key material the service cannot attribute to this client.
        if !agent.kms_secret_matches(&self.options.kms_secret_key) {
            return Err(ToolsetError::KmsSecretMismatch);
        }

        let token = self.authenticate().await?;

        let issued_at = Utc::now().to_rfc3339();
        let digest = SignedDigest {
            pii: &request.pii,
            originator_vasp_did: &request.originator_vasp_did,
            beneficiary_vasp_did: &request.beneficiary_vasp_did,
            issued_at: &issued_at,
        };
        let canonical =
            serde_json::to_vec(&digest).map_err(|e| ToolsetError::InvalidRequest(e.to_string()))?;
        let signature = agent
            .sign_payload(&request.sender_did_key, &canonical)
            .await?;

        let url = Self::endpoint(&self.options.pii_url, "v1/pii/encode");
        log::debug!(
            "generating PII fields via {} for originator VASP {}",
            url,
            request.originator_vasp_did
        );

        let body = EncodeRequestBody {
            proof: SenderProof {
                did: request.sender_did_key.clone(),
                issued_at,
                signature: base64::encode(&signature),
            },
            request,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ToolsetError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ToolsetError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<PiiFields>()
            .await
            .map_err(|e| ToolsetError::InvalidResponse(e.to_string()))
    }
}
