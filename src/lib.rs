// src/lib.rs

//! # Travel Rule PII Encryption Client
//!
//! Prepares a financial-transaction message for regulatory "travel rule"
//! compliance by encrypting originator and beneficiary PII before
//! transmission. The crate is a thin orchestration layer: configuration is
//! validated once, then a single transform operation delegates the actual
//! cryptography to an external PII encryption service and a per-call
//! identity-agent runtime.
//!
//! ## Architecture Overview
//! 1. **Config Layer**: required-field validation of service credentials
//! 2. **Services Layer**: the [`PiiEncryption`] adapter and its
//!    `hybrid_encode` operation
//! 3. **Toolset Layer**: HTTP client for the external PII service, behind
//!    the [`toolset::PiiToolset`] trait
//! 4. **Agent Layer**: per-call DID key import and request signing
//!
//! ## Usage
//! ```no_run
//! use travel_rule_pii::{PiiEncryption, TravelRuleConfig};
//! # async fn run(mut transaction: travel_rule_pii::models::TransactionArguments)
//! # -> Result<(), travel_rule_pii::TravelRuleError> {
//! let config = TravelRuleConfig::from_env();
//! let encryption = PiiEncryption::new(config)?;
//! encryption.hybrid_encode(&mut transaction).await?;
//! # Ok(())
//! # }
//! ```

pub mod agent; // Identity-agent runtime for DID keys
pub mod config; // Configuration record and validation
pub mod models; // Data structures
pub mod services; // The encryption adapter
pub mod toolset; // External PII toolset seam
pub mod utils; // Error types

pub use config::TravelRuleConfig;
pub use services::PiiEncryption;
pub use utils::errors::TravelRuleError;
