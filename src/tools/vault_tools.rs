//! The fixed set of vault tools exposed to MCP hosts.

use serde_json::json;

use super::catalog::{ParamDef, ParamType, ToolCatalog, ToolDescriptor};
use crate::types::Result;

/// Default `limit` for `get_recent_changes`.
pub const DEFAULT_RECENT_LIMIT: u64 = 10;
/// Default `days` for `get_recent_changes`.
pub const DEFAULT_RECENT_DAYS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VaultTool {
    ListFilesInVault,
    ListFilesInDir,
    GetFileContent,
    CreateFile,
    UpdateFile,
    BatchGetFileContents,
    GetRecentChanges,
}

impl VaultTool {
    /// Every tool, in the order advertised by `tools/list`.
    pub const ALL: [VaultTool; 7] = [
        VaultTool::ListFilesInVault,
        VaultTool::ListFilesInDir,
        VaultTool::GetFileContent,
        VaultTool::CreateFile,
        VaultTool::UpdateFile,
        VaultTool::BatchGetFileContents,
        VaultTool::GetRecentChanges,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VaultTool::ListFilesInVault => "list_files_in_vault",
            VaultTool::ListFilesInDir => "list_files_in_dir",
            VaultTool::GetFileContent => "get_file_content",
            VaultTool::CreateFile => "create_file",
            VaultTool::UpdateFile => "update_file",
            VaultTool::BatchGetFileContents => "batch_get_file_contents",
            VaultTool::GetRecentChanges => "get_recent_changes",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    pub fn descriptor(self) -> ToolDescriptor {
        let (description, parameters) = match self {
            VaultTool::ListFilesInVault => (
                "Lists all files and directories in the root directory of your Obsidian vault",
                vec![],
            ),
            VaultTool::ListFilesInDir => (
                "Lists all files and directories in a directory of your Obsidian vault. \
                 Directories end with '/'.",
                vec![path_param("Directory path relative to the vault root")],
            ),
            VaultTool::GetFileContent => (
                "Returns the content of a single file in your Obsidian vault",
                vec![path_param("File path relative to the vault root")],
            ),
            VaultTool::CreateFile => (
                "Creates a new file in your Obsidian vault",
                vec![
                    path_param("File path relative to the vault root"),
                    content_param("Content of the new file"),
                ],
            ),
            VaultTool::UpdateFile => (
                "Replaces the content of an existing file in your Obsidian vault",
                vec![
                    path_param("File path relative to the vault root"),
                    content_param("New content of the file"),
                ],
            ),
            VaultTool::BatchGetFileContents => (
                "Returns the contents of several files, each preceded by a '# File: <path>' header. \
                 Unreadable files are skipped.",
                vec![ParamDef::required(
                    "filepaths",
                    ParamType::StringList,
                    "File paths relative to the vault root",
                )],
            ),
            VaultTool::GetRecentChanges => (
                "Lists recently changed files. Timestamps are approximated from listing order \
                 because the REST API does not expose modification times.",
                vec![
                    ParamDef::optional(
                        "limit",
                        ParamType::Count,
                        "Maximum number of files to return",
                        json!(DEFAULT_RECENT_LIMIT),
                    ),
                    ParamDef::optional(
                        "days",
                        ParamType::Count,
                        "Time window in days; accepted for compatibility and currently ignored",
                        json!(DEFAULT_RECENT_DAYS),
                    ),
                ],
            ),
        };

        ToolDescriptor {
            name: self.name().to_string(),
            description: description.to_string(),
            parameters,
        }
    }
}

fn path_param(description: &str) -> ParamDef {
    ParamDef::optional("path", ParamType::String, description, json!(""))
}

fn content_param(description: &str) -> ParamDef {
    ParamDef::required("content", ParamType::String, description)
}

/// Catalog holding every [`VaultTool`].
pub fn vault_catalog() -> Result<ToolCatalog> {
    let mut catalog = ToolCatalog::new();
    for tool in VaultTool::ALL {
        catalog.register(tool.descriptor())?;
    }
    Ok(catalog)
}
