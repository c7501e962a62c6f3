// src/main.rs

//! # Travel Rule PII Encryption - Main Entry Point
//!
//! Thin CLI over the encryption adapter: reads a transaction JSON file,
//! encrypts its travel rule PII, and prints the encrypted transaction.
//!
//! ## Environment Variables Required
//! - `KMS_SECRET_KEY`: secret seeding the identity-agent runtime
//! - `BASE_URL_PII`: base URL of the PII encryption service
//! - `AUDIENCE_PII`: OAuth audience for the PII service
//! - `CLIENT_ID` / `CLIENT_SECRET`: OAuth client credentials
//! - `AUTH_URL`: base URL of the OAuth token endpoint
//! - `JSON_DID_KEY`: serialized DID key material
//! - `JSON_BENEFICIARY_DID_KEY`: (optional) counterparty DID key

use anyhow::Context;
use dotenv::dotenv;
use travel_rule_pii::models::TransactionArguments;
use travel_rule_pii::{PiiEncryption, TravelRuleConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: travel-rule-pii <transaction.json>")?;
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read transaction file {path}"))?;
    let mut transaction: TransactionArguments =
        serde_json::from_str(&raw).context("transaction file is not a valid transaction")?;

    let config = TravelRuleConfig::from_env();
    let encryption = PiiEncryption::new(config)?;
    encryption.hybrid_encode(&mut transaction).await?;

    println!("{}", serde_json::to_string_pretty(&transaction)?);
    Ok(())
}
