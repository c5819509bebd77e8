//! Application error types.
//!
//! These errors belong to the request-validation / dispatch domain: they are
//! logged and surfaced to the MCP host as protocol-level failures. Remote I/O
//! faults never appear here; see [`crate::vault::VaultError`].

use thiserror::Error;

use crate::mcp::protocol::error_codes;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the tool bridge.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or ill-typed tool arguments (map to INVALID_PARAMS).
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Tool name not present in the catalog (map to INVALID_PARAMS).
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// A tool with the same name is already registered.
    #[error("duplicate tool: {0}")]
    DuplicateTool(String),

    /// Startup configuration errors.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Convert to a JSON-RPC error code.
    pub fn to_jsonrpc_code(&self) -> i32 {
        match self {
            Error::InvalidArguments(_) | Error::UnknownTool(_) => error_codes::INVALID_PARAMS,
            Error::DuplicateTool(_)
            | Error::Config(_)
            | Error::Serialization(_)
            | Error::Io(_) => error_codes::INTERNAL_ERROR,
        }
    }
}

// Convenience constructors
impl Error {
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    pub fn duplicate_tool(name: impl Into<String>) -> Self {
        Self::DuplicateTool(name.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
