//! Obsidian Local REST API client.
//!
//! Every operation is single-attempt and never fails: faults are logged and
//! degrade to an empty listing, absent content or `false`.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Url};
use std::fmt;

use super::error::VaultError;
use super::models::{
    synthesize_recent_changes, FileContent, FileContentResponse, FileMetadata, VaultListResponse,
};
use crate::types::ObsidianConfig;

/// Primitive vault operations.
///
/// Implementations own their transport; nothing else issues vault HTTP calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VaultApi: Send + Sync {
    /// List entries of the vault root (`None`) or of a directory.
    ///
    /// Directories carry a trailing `/`. Returns an empty list on any failure.
    async fn list_files(&self, path: Option<String>) -> Vec<String>;

    /// Fetch a file's content. `None` when missing or on any failure.
    async fn get_file_content(&self, path: &str) -> Option<String>;

    /// Create a file. `true` iff the API answered 2xx.
    async fn create_file(&self, path: &str, content: &str) -> bool;

    /// Overwrite a file. `true` iff the API answered 2xx.
    async fn update_file(&self, path: &str, content: &str) -> bool;
}

/// Composite operations built on [`VaultApi`].
#[async_trait]
pub trait VaultApiExt: VaultApi {
    /// Fetch several files sequentially, in input order.
    ///
    /// Paths that cannot be read are omitted; one bad path never aborts the batch.
    async fn get_batch_file_contents(&self, paths: &[String]) -> Vec<FileContent> {
        let mut contents = Vec::with_capacity(paths.len());
        for path in paths {
            match self.get_file_content(path).await {
                Some(content) => contents.push(FileContent {
                    path: path.clone(),
                    content,
                }),
                None => tracing::debug!(path = %path, "Omitting unreadable file from batch"),
            }
        }
        contents
    }

    /// First `limit` root entries with synthetic timestamps.
    ///
    /// `days` is accepted but unused until the API exposes real modification times.
    async fn get_recent_changes(&self, limit: usize, _days: u32) -> Vec<FileMetadata> {
        let files = self.list_files(None).await;
        synthesize_recent_changes(files, limit, Utc::now())
    }
}

impl<T: VaultApi + ?Sized> VaultApiExt for T {}

/// reqwest-backed client for the Obsidian Local REST API.
#[derive(Clone)]
pub struct ObsidianClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl fmt::Debug for ObsidianClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObsidianClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ObsidianClient {
    pub fn new(config: &ObsidianConfig) -> Result<Self, VaultError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("obsidian-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http_client(http, config))
    }

    /// Build on top of an existing reqwest client (shared pools, custom TLS).
    pub fn with_http_client(http: reqwest::Client, config: &ObsidianConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// `/vault/` for the root, `/vault/{path}/` otherwise.
    ///
    /// Each path segment is percent-encoded; empty segments are skipped so
    /// `""` and `"/"` both address the root. A base path prefix is kept.
    pub fn endpoint(&self, path: Option<&str>) -> Result<Url, VaultError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| VaultError::InvalidEndpoint(self.base_url.to_string()))?;
            segments.pop_if_empty().push("vault");
            if let Some(path) = path {
                segments.extend(path.split('/').filter(|s| !s.is_empty()));
            }
            segments.push("");
        }
        Ok(url)
    }

    async fn fetch_listing(&self, path: Option<&str>) -> Result<Vec<String>, VaultError> {
        let url = self.endpoint(path)?;
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await?
            .error_for_status()?;
        let body: VaultListResponse = response.json().await?;
        Ok(body.files)
    }

    async fn fetch_content(&self, path: &str) -> Result<String, VaultError> {
        let url = self.endpoint(Some(path))?;
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await?
            .error_for_status()?;
        let body: FileContentResponse = response.json().await?;
        Ok(body.content)
    }

    async fn send_content(&self, method: Method, path: &str, content: &str) -> Result<(), VaultError> {
        let url = self.endpoint(Some(path))?;
        let endpoint = url.path().to_string();
        let response = self
            .http
            .request(method, url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "text/markdown")
            .body(content.to_owned())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(VaultError::Status { status, endpoint })
        }
    }
}

#[async_trait]
impl VaultApi for ObsidianClient {
    async fn list_files(&self, path: Option<String>) -> Vec<String> {
        match self.fetch_listing(path.as_deref()).await {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "Failed to list files");
                Vec::new()
            }
        }
    }

    async fn get_file_content(&self, path: &str) -> Option<String> {
        match self.fetch_content(path).await {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::warn!(path, error = %e, "Failed to read file");
                None
            }
        }
    }

    async fn create_file(&self, path: &str, content: &str) -> bool {
        match self.send_content(Method::PUT, path, content).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path, error = %e, "Failed to create file");
                false
            }
        }
    }

    async fn update_file(&self, path: &str, content: &str) -> bool {
        match self.send_content(Method::POST, path, content).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path, error = %e, "Failed to update file");
                false
            }
        }
    }
}
