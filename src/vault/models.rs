//! Vault data model and REST API wire bodies.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Response body of `GET /vault/` and `GET /vault/{dir}/`.
#[derive(Debug, Clone, Deserialize)]
pub struct VaultListResponse {
    pub files: Vec<String>,
}

/// Response body of `GET /vault/{file}/`.
#[derive(Debug, Clone, Deserialize)]
pub struct FileContentResponse {
    pub content: String,
}

/// A file fetched from the vault. Never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    pub path: String,
    pub content: String,
}

/// Per-file timestamps reported by `get_recent_changes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub path: String,
    pub modified: DateTime<Utc>,
    pub created: DateTime<Utc>,
}

/// Derive "recent changes" from a plain listing.
///
/// The REST API exposes no modification times, so timestamps are synthetic:
/// entry `i` of the listing is stamped `now - i days` for both `modified`
/// and `created`. The first `limit` entries are returned, in listing order.
pub fn synthesize_recent_changes(
    files: Vec<String>,
    limit: usize,
    now: DateTime<Utc>,
) -> Vec<FileMetadata> {
    files
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(age, path)| {
            let stamp = now - Duration::days(age as i64);
            FileMetadata {
                path,
                modified: stamp,
                created: stamp,
            }
        })
        .collect()
}
