//! # Obsidian MCP - vault tools for AI-agent hosts
//!
//! Exposes the Obsidian Local REST API as MCP tools:
//! - Remote vault client with single-attempt, degrade-to-sentinel calls
//! - Fixed tool catalog with typed parameters and JSON Schema inputs
//! - Dispatcher that validates arguments before touching the vault
//! - JSON-RPC session shell over any duplex byte stream (stdio in production)
//!
//! ## Architecture
//!
//! ```text
//!   host ──JSON-RPC──▶ McpServer ──▶ ToolDispatcher ──▶ VaultApi ──HTTP──▶ Obsidian
//!        ◀──────────── (content) ◀── (ToolResult)   ◀── (sentinels)
//! ```
//!
//! Validation failures travel back as JSON-RPC errors; remote faults are
//! logged and surface as ordinary text results ("Failed to create file").

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod mcp;
pub mod tools;
pub mod types;
pub mod vault;

// Internal utilities
pub mod observability;

pub use mcp::McpServer;
pub use tools::ToolDispatcher;
pub use types::{Config, Error, ObsidianConfig, Result};
pub use vault::{ObsidianClient, VaultApi, VaultApiExt};
