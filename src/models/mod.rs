// src/models/mod.rs
//! Data structures for transactions, travel rule messages, and DID keys.

pub mod did;
pub mod transaction;

pub use did::{DidKeyMaterial, ManagedKey};
pub use transaction::{PiiData, TransactionArguments, TravelRuleMessage};
