//! Tool dispatcher — validates arguments, calls the vault, shapes results.
//!
//! Unlike the vault client, the dispatcher never swallows errors: unknown
//! tools and invalid arguments are logged and returned to the caller before
//! any remote call is made.

use serde_json::{json, Value};
use std::fmt;
use std::sync::Arc;

use super::args::ToolArguments;
use super::catalog::ToolCatalog;
use super::result::ToolResult;
use super::vault_tools::{vault_catalog, VaultTool};
use crate::types::{Error, Result};
use crate::vault::{FileContent, VaultApi, VaultApiExt};

pub struct ToolDispatcher {
    catalog: ToolCatalog,
    vault: Arc<dyn VaultApi>,
}

impl fmt::Debug for ToolDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDispatcher")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl ToolDispatcher {
    /// Dispatcher over the full vault tool catalog.
    pub fn new(vault: Arc<dyn VaultApi>) -> Result<Self> {
        Ok(Self {
            catalog: vault_catalog()?,
            vault,
        })
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Invoke a tool by name.
    ///
    /// Failures are logged here and returned unchanged.
    pub async fn call(&self, name: &str, arguments: Option<&Value>) -> Result<ToolResult> {
        match self.invoke(name, arguments).await {
            Ok(result) => Ok(result),
            Err(e) => {
                tracing::error!(tool = name, error = %e, "Tool call failed");
                Err(e)
            }
        }
    }

    async fn invoke(&self, name: &str, arguments: Option<&Value>) -> Result<ToolResult> {
        let tool = VaultTool::from_name(name)
            .filter(|_| self.catalog.has_tool(name))
            .ok_or_else(|| Error::unknown_tool(name))?;

        let mut args = ToolArguments::from_value(arguments);
        let errors = self.catalog.validate_args(name, args.as_map())?;
        if !errors.is_empty() {
            return Err(Error::invalid_arguments(errors.join("; ")));
        }
        self.catalog.fill_defaults(name, args.as_map_mut())?;

        tracing::debug!(tool = name, "Dispatching tool call");

        let text = match tool {
            VaultTool::ListFilesInVault => {
                let files = self.vault.list_files(None).await;
                format_file_listing(&files)?
            }
            VaultTool::ListFilesInDir => {
                let path = args.string("path")?;
                let files = self.vault.list_files(Some(path)).await;
                format_file_listing(&files)?
            }
            VaultTool::GetFileContent => {
                let path = args.string("path")?;
                self.vault
                    .get_file_content(&path)
                    .await
                    .unwrap_or_else(|| format!("File not found: {}", path))
            }
            VaultTool::CreateFile => {
                let path = args.string("path")?;
                let content = args.string("content")?;
                if self.vault.create_file(&path, &content).await {
                    "File created successfully".to_string()
                } else {
                    "Failed to create file".to_string()
                }
            }
            VaultTool::UpdateFile => {
                let path = args.string("path")?;
                let content = args.string("content")?;
                if self.vault.update_file(&path, &content).await {
                    "File updated successfully".to_string()
                } else {
                    "Failed to update file".to_string()
                }
            }
            VaultTool::BatchGetFileContents => {
                let paths = args.string_list("filepaths")?;
                let contents = self.vault.get_batch_file_contents(&paths).await;
                format_batch(&contents)
            }
            VaultTool::GetRecentChanges => {
                let limit = usize::try_from(args.count("limit")?).unwrap_or(usize::MAX);
                let days = u32::try_from(args.count("days")?).unwrap_or(u32::MAX);
                let changes = self.vault.get_recent_changes(limit, days).await;
                serde_json::to_string(&changes)?
            }
        };

        Ok(ToolResult::text(text))
    }
}

/// `[{"file": path}, ...]` as compact JSON.
pub fn format_file_listing(files: &[String]) -> Result<String> {
    let entries: Vec<Value> = files.iter().map(|file| json!({ "file": file })).collect();
    Ok(serde_json::to_string(&entries)?)
}

/// Each file framed as `# File: {path}\n\n{content}\n\n`, in order.
pub fn format_batch(contents: &[FileContent]) -> String {
    contents
        .iter()
        .map(|file| format!("# File: {}\n\n{}\n\n", file.path, file.content))
        .collect()
}
