//! Vault client integration tests — real reqwest client against an axum
//! stand-in for the Obsidian Local REST API.

mod common;

use common::{client, spawn_vault, MockVault, API_KEY};
use obsidian_mcp::vault::FileContent;
use obsidian_mcp::{ToolDispatcher, VaultApi, VaultApiExt};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_list_root_sends_bearer_token() {
    let vault = MockVault::with_files(&[("todo.md", "- [ ] ship"), ("Daily/2024-06-15.md", "log")]);
    let url = spawn_vault(vault.clone()).await;

    let files = client(&url, API_KEY).list_files(None).await;

    assert_eq!(files, vec!["Daily/".to_string(), "todo.md".to_string()]);
    assert_eq!(vault.auth_headers(), vec![format!("Bearer {}", API_KEY)]);
}

#[tokio::test]
async fn test_list_subdirectory() {
    let vault = MockVault::with_files(&[("Daily/a.md", "a"), ("Daily/b.md", "b"), ("other.md", "o")]);
    let url = spawn_vault(vault).await;

    let files = client(&url, API_KEY).list_files(Some("Daily".to_string())).await;
    assert_eq!(files, vec!["a.md".to_string(), "b.md".to_string()]);
}

#[tokio::test]
async fn test_empty_vault_lists_as_empty_array() {
    let url = spawn_vault(MockVault::default()).await;
    let dispatcher = ToolDispatcher::new(Arc::new(client(&url, API_KEY))).unwrap();

    let result = dispatcher.call("list_files_in_vault", None).await.unwrap();
    assert_eq!(result.text_content(), "[]");
}

#[tokio::test]
async fn test_missing_directory_degrades_to_empty() {
    let url = spawn_vault(MockVault::default()).await;
    assert!(client(&url, API_KEY)
        .list_files(Some("nowhere".to_string()))
        .await
        .is_empty());
}

// =============================================================================
// Failure isolation
// =============================================================================

#[tokio::test]
async fn test_wrong_api_key_degrades_to_sentinels() {
    let vault = MockVault::with_files(&[("a.md", "alpha")]);
    let url = spawn_vault(vault.clone()).await;
    let client = client(&url, "wrong-key");

    assert!(client.list_files(None).await.is_empty());
    assert_eq!(client.get_file_content("a.md").await, None);
    assert!(!client.create_file("b.md", "beta").await);
    assert_eq!(vault.file("b.md"), None);
}

#[tokio::test]
async fn test_server_errors_become_failure_messages() {
    let url = spawn_vault(MockVault::failing()).await;
    let client = client(&url, API_KEY);

    assert!(!client.create_file("a.md", "x").await);
    assert!(!client.update_file("a.md", "x").await);

    let dispatcher = ToolDispatcher::new(Arc::new(client)).unwrap();
    let args = json!({"path": "a.md", "content": "x"});

    let created = dispatcher.call("create_file", Some(&args)).await.unwrap();
    assert_eq!(created.text_content(), "Failed to create file");
    assert!(!created.is_error);

    let updated = dispatcher.call("update_file", Some(&args)).await.unwrap();
    assert_eq!(updated.text_content(), "Failed to update file");

    let listed = dispatcher.call("list_files_in_vault", None).await.unwrap();
    assert_eq!(listed.text_content(), "[]");
}

#[tokio::test]
async fn test_update_of_missing_file_fails() {
    let url = spawn_vault(MockVault::default()).await;
    assert!(!client(&url, API_KEY).update_file("ghost.md", "boo").await);
}

// =============================================================================
// Content round trips
// =============================================================================

#[tokio::test]
async fn test_write_then_read_returns_new_content() {
    let vault = MockVault::with_files(&[("note.md", "v1")]);
    let url = spawn_vault(vault.clone()).await;
    let client = client(&url, API_KEY);

    assert_eq!(client.get_file_content("note.md").await.as_deref(), Some("v1"));

    assert!(client.update_file("note.md", "v2").await);
    assert_eq!(client.get_file_content("note.md").await.as_deref(), Some("v2"));

    assert_eq!(client.get_file_content("fresh.md").await, None);
    assert!(client.create_file("fresh.md", "# Fresh").await);
    assert_eq!(client.get_file_content("fresh.md").await.as_deref(), Some("# Fresh"));
    assert_eq!(vault.file("fresh.md").as_deref(), Some("# Fresh"));
}

#[tokio::test]
async fn test_paths_with_spaces_are_encoded() {
    let vault = MockVault::default();
    let url = spawn_vault(vault.clone()).await;
    let client = client(&url, API_KEY);

    assert!(client.create_file("My Notes/idea #1.md", "spark").await);
    assert_eq!(vault.file("My Notes/idea #1.md").as_deref(), Some("spark"));
    assert_eq!(
        client.get_file_content("My Notes/idea #1.md").await.as_deref(),
        Some("spark")
    );
}

// =============================================================================
// Composite operations
// =============================================================================

#[tokio::test]
async fn test_batch_skips_missing_files() {
    let vault = MockVault::with_files(&[("a.md", "alpha"), ("c.md", "gamma")]);
    let url = spawn_vault(vault).await;
    let client = client(&url, API_KEY);

    let paths = vec!["c.md".to_string(), "b.md".to_string(), "a.md".to_string()];
    let contents = client.get_batch_file_contents(&paths).await;

    assert_eq!(
        contents,
        vec![
            FileContent { path: "c.md".to_string(), content: "gamma".to_string() },
            FileContent { path: "a.md".to_string(), content: "alpha".to_string() },
        ]
    );
}

#[tokio::test]
async fn test_recent_changes_takes_first_listing_entries() {
    let vault = MockVault::with_files(&[
        ("1.md", "1"),
        ("2.md", "2"),
        ("3.md", "3"),
        ("4.md", "4"),
        ("5.md", "5"),
    ]);
    let url = spawn_vault(vault).await;
    let dispatcher = ToolDispatcher::new(Arc::new(client(&url, API_KEY))).unwrap();

    let result = dispatcher
        .call("get_recent_changes", Some(&json!({"limit": 3, "days": 30})))
        .await
        .unwrap();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&result.text_content()).unwrap();
    let paths: Vec<&str> = entries.iter().map(|e| e["path"].as_str().unwrap()).collect();

    assert_eq!(paths, vec!["1.md", "2.md", "3.md"]);
}
