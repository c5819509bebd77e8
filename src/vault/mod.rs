//! Remote vault access over the Obsidian Local REST API.
//!
//! - **client**: `VaultApi` trait, composite `VaultApiExt` ops, reqwest client
//! - **models**: wire bodies, `FileContent`, `FileMetadata`
//! - **error**: `VaultError`, internal to the client layer

pub mod client;
pub mod error;
pub mod models;

#[cfg(test)]
pub use client::MockVaultApi;
pub use client::{ObsidianClient, VaultApi, VaultApiExt};
pub use error::VaultError;
pub use models::{synthesize_recent_changes, FileContent, FileMetadata};
