// src/config.rs
//! Configuration for the travel rule PII encryption client.
//!
//! The surrounding system hands the adapter a flat record of credentials and
//! endpoints (typically loaded from the environment or a `.env` file). All
//! fields arrive optional; validation happens once, when the adapter is
//! constructed, and reports every missing required field at the same time.
//!
//! ## Environment Variables
//! - `KMS_SECRET_KEY`: secret seeding the identity-agent runtime
//! - `BASE_URL_PII`: base URL of the PII encryption service
//! - `AUDIENCE_PII`: OAuth audience for the PII service
//! - `CLIENT_ID` / `CLIENT_SECRET`: OAuth client credentials
//! - `AUTH_URL`: base URL of the OAuth token endpoint
//! - `JSON_DID_KEY`: serialized DID key material (JSON document)
//! - `JSON_BENEFICIARY_DID_KEY`: (optional) counterparty DID key

use crate::utils::errors::TravelRuleError;
use serde::Deserialize;

/// Field names that must be present before the adapter can be built.
/// Names are the wire-level (camelCase) keys the surrounding system uses.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "kmsSecretKey",
    "baseURLPII",
    "audiencePII",
    "clientId",
    "clientSecret",
    "authURL",
    "jsonDidKey",
];

/// Unvalidated configuration record, as supplied by the caller.
///
/// Every field is optional at this stage so that validation can report the
/// full set of missing fields rather than failing on the first one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelRuleConfig {
    pub kms_secret_key: Option<String>,
    #[serde(rename = "baseURLPII")]
    pub base_url_pii: Option<String>,
    #[serde(rename = "audiencePII")]
    pub audience_pii: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    #[serde(rename = "authURL")]
    pub auth_url: Option<String>,
    pub json_did_key: Option<String>,
    pub json_beneficiary_did_key: Option<String>,
}

impl TravelRuleConfig {
    /// Builds a configuration record from process environment variables.
    ///
    /// Absent variables simply leave their field unset; validation decides
    /// later whether that is fatal.
    pub fn from_env() -> Self {
        TravelRuleConfig {
            kms_secret_key: std::env::var("KMS_SECRET_KEY").ok(),
            base_url_pii: std::env::var("BASE_URL_PII").ok(),
            audience_pii: std::env::var("AUDIENCE_PII").ok(),
            client_id: std::env::var("CLIENT_ID").ok(),
            client_secret: std::env::var("CLIENT_SECRET").ok(),
            auth_url: std::env::var("AUTH_URL").ok(),
            json_did_key: std::env::var("JSON_DID_KEY").ok(),
            json_beneficiary_did_key: std::env::var("JSON_BENEFICIARY_DID_KEY").ok(),
        }
    }

    /// Returns the names of every required field that is absent, in the
    /// order of [`REQUIRED_FIELDS`].
    pub fn missing_fields(&self) -> Vec<String> {
        REQUIRED_FIELDS
            .iter()
            .filter(|field| !self.has_field(field))
            .map(|field| field.to_string())
            .collect()
    }

    fn has_field(&self, field: &str) -> bool {
        match field {
            "kmsSecretKey" => self.kms_secret_key.is_some(),
            "baseURLPII" => self.base_url_pii.is_some(),
            "audiencePII" => self.audience_pii.is_some(),
            "clientId" => self.client_id.is_some(),
            "clientSecret" => self.client_secret.is_some(),
            "authURL" => self.auth_url.is_some(),
            "jsonDidKey" => self.json_did_key.is_some(),
            _ => true,
        }
    }

    /// Validates the record, producing a [`ValidatedConfig`] with all
    /// required fields guaranteed present.
    ///
    /// # Errors
    /// [`TravelRuleError::MissingConfiguration`] naming every absent field.
    pub fn validate(self) -> Result<ValidatedConfig, TravelRuleError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(TravelRuleError::MissingConfiguration(missing));
        }

        Ok(ValidatedConfig {
            kms_secret_key: self.kms_secret_key.unwrap_or_default(),
            base_url_pii: self.base_url_pii.unwrap_or_default(),
            audience_pii: self.audience_pii.unwrap_or_default(),
            client_id: self.client_id.unwrap_or_default(),
            client_secret: self.client_secret.unwrap_or_default(),
            auth_url: self.auth_url.unwrap_or_default(),
            json_did_key: self.json_did_key.unwrap_or_default(),
            json_beneficiary_did_key: self.json_beneficiary_did_key,
        })
    }
}

/// Configuration with all required fields present, held by the adapter for
/// its lifetime and treated as immutable after construction.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub kms_secret_key: String,
    pub base_url_pii: String,
    pub audience_pii: String,
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: String,
    pub json_did_key: String,
    /// Counterparty DID key; legitimately absent when the beneficiary VASP
    /// has not shared one.
    pub json_beneficiary_did_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> TravelRuleConfig {
        TravelRuleConfig {
            kms_secret_key: Some("kms-secret".to_string()),
            base_url_pii: Some("https://pii.example.com".to_string()),
            audience_pii: Some("https://pii.example.com/api".to_string()),
            client_id: Some("client-id".to_string()),
            client_secret: Some("client-secret".to_string()),
            auth_url: Some("https://auth.example.com".to_string()),
            json_did_key: Some("{\"did\":\"did:key:z6MkTest\",\"keys\":[]}".to_string()),
            json_beneficiary_did_key: None,
        }
    }

    #[test]
    fn test_complete_config_validates() {
        let validated = full_config().validate().expect("config should validate");
        assert_eq!(validated.kms_secret_key, "kms-secret");
        assert!(validated.json_beneficiary_did_key.is_none());
    }

    #[test]
    fn test_missing_fields_reported_individually() {
        let mut config = full_config();
        config.kms_secret_key = None;
        config.auth_url = None;
        config.json_did_key = None;

        assert_eq!(
            config.missing_fields(),
            vec!["kmsSecretKey", "authURL", "jsonDidKey"]
        );
    }

    #[test]
    fn test_empty_config_reports_every_required_field() {
        let config = TravelRuleConfig::default();
        assert_eq!(config.missing_fields(), REQUIRED_FIELDS.to_vec());
    }

    #[test]
    fn test_beneficiary_key_is_not_required() {
        let mut config = full_config();
        config.json_beneficiary_did_key = None;
        assert!(config.missing_fields().is_empty());
    }

    #[test]
    fn test_validate_error_names_missing_fields() {
        let mut config = full_config();
        config.client_id = None;
        config.client_secret = None;

        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing configuration fields: clientId, clientSecret"
        );
    }

    #[test]
    fn test_deserializes_wire_field_names() {
        let config: TravelRuleConfig = serde_json::from_str(
            r#"{
                "kmsSecretKey": "s",
                "baseURLPII": "https://pii.example.com",
                "audiencePII": "aud",
                "clientId": "id",
                "clientSecret": "secret",
                "authURL": "https://auth.example.com",
                "jsonDidKey": "{}"
            }"#,
        )
        .unwrap();
        assert!(config.missing_fields().is_empty());
        assert_eq!(config.base_url_pii.as_deref(), Some("https://pii.example.com"));
    }
}
