// src/agent/mod.rs
//! Per-call identity-agent runtime for DID key management and signing.

pub mod runtime;

pub use runtime::{init_agent, AgentRuntime};
