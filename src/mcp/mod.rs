//! MCP (Model Context Protocol) server over newline-delimited JSON-RPC.

pub mod protocol;
pub mod server;

pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION};
pub use server::McpServer;
