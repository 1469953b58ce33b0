//! Networking modules for the REST surface consumed by the client core.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `config` resolves endpoint URLs, `error`
//! classifies failures, and `types` defines the JSON wire schema.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
