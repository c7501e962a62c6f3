// src/utils/mod.rs
//! Shared utilities: error types.

pub mod errors;
