//! Tool infrastructure — catalog, argument handling, dispatch.
//!
//! The catalog owns tool metadata, the dispatcher routes validated calls to
//! the vault client and shapes results into MCP content.

pub mod args;
pub mod catalog;
pub mod dispatch;
pub mod result;
pub mod vault_tools;

pub use args::ToolArguments;
pub use catalog::{ParamDef, ParamType, ToolCatalog, ToolDescriptor};
pub use dispatch::ToolDispatcher;
pub use result::{ContentBlock, ToolResult};
pub use vault_tools::{vault_catalog, VaultTool};
