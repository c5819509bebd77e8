//! Core types for the tool bridge.
//!
//! - **Errors**: dispatcher-domain error type with thiserror derives
//! - **Config**: vault connection, server identity and observability settings

mod config;
mod errors;

pub use config::{Config, ObservabilityConfig, ObsidianConfig, ServerConfig, DEFAULT_OBSIDIAN_URL};
pub use errors::{Error, Result};
