//! In-process stand-in for the Obsidian Local REST API, served by axum.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use obsidian_mcp::{ObsidianClient, ObsidianConfig};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

pub const API_KEY: &str = "test-key";

#[derive(Clone, Default)]
pub struct MockVault {
    files: Arc<Mutex<BTreeMap<String, String>>>,
    auth_headers: Arc<Mutex<Vec<String>>>,
    fail_all: bool,
}

impl MockVault {
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let vault = Self::default();
        {
            let mut map = vault.files.lock().unwrap();
            for (path, content) in files {
                map.insert(path.to_string(), content.to_string());
            }
        }
        vault
    }

    /// A vault that answers HTTP 500 to every request.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn auth_headers(&self) -> Vec<String> {
        self.auth_headers.lock().unwrap().clone()
    }

    /// Entries directly under `dir` ("" = root); directories end with `/`.
    fn entries(&self, dir: &str) -> Option<Vec<String>> {
        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{}/", dir)
        };
        let files = self.files.lock().unwrap();
        let mut entries: Vec<String> = Vec::new();
        for path in files.keys() {
            let Some(rest) = path.strip_prefix(&prefix) else {
                continue;
            };
            let entry = match rest.split_once('/') {
                Some((child, _)) => format!("{}/", child),
                None => rest.to_string(),
            };
            if !entries.contains(&entry) {
                entries.push(entry);
            }
        }
        if entries.is_empty() && !dir.is_empty() {
            None
        } else {
            Some(entries)
        }
    }

    /// Record the request and decide whether to reject it.
    fn gate(&self, headers: &HeaderMap) -> Option<Response> {
        let auth = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        self.auth_headers.lock().unwrap().push(auth.clone());

        if self.fail_all {
            return Some(StatusCode::INTERNAL_SERVER_ERROR.into_response());
        }
        if auth != format!("Bearer {}", API_KEY) {
            return Some(StatusCode::UNAUTHORIZED.into_response());
        }
        None
    }
}

fn normalize(path: &str) -> String {
    path.trim_matches('/').to_string()
}

async fn list_root(State(vault): State<MockVault>, headers: HeaderMap) -> Response {
    if let Some(rejection) = vault.gate(&headers) {
        return rejection;
    }
    Json(json!({ "files": vault.entries("").unwrap_or_default() })).into_response()
}

async fn read_entry(
    State(vault): State<MockVault>,
    headers: HeaderMap,
    Path(path): Path<String>,
) -> Response {
    if let Some(rejection) = vault.gate(&headers) {
        return rejection;
    }
    let path = normalize(&path);
    if let Some(content) = vault.file(&path) {
        return Json(json!({ "content": content })).into_response();
    }
    match vault.entries(&path) {
        Some(files) => Json(json!({ "files": files })).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create_entry(
    State(vault): State<MockVault>,
    headers: HeaderMap,
    Path(path): Path<String>,
    body: String,
) -> Response {
    if let Some(rejection) = vault.gate(&headers) {
        return rejection;
    }
    vault.files.lock().unwrap().insert(normalize(&path), body);
    StatusCode::NO_CONTENT.into_response()
}

async fn update_entry(
    State(vault): State<MockVault>,
    headers: HeaderMap,
    Path(path): Path<String>,
    body: String,
) -> Response {
    if let Some(rejection) = vault.gate(&headers) {
        return rejection;
    }
    let mut files = vault.files.lock().unwrap();
    match files.get_mut(&normalize(&path)) {
        Some(existing) => {
            *existing = body;
            StatusCode::NO_CONTENT.into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Serve `vault` on an ephemeral port and return its base URL.
pub async fn spawn_vault(vault: MockVault) -> String {
    let app = Router::new()
        .route("/vault/", get(list_root))
        .route(
            "/vault/{*path}",
            get(read_entry).put(create_entry).post(update_entry),
        )
        .with_state(vault);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Client for the stand-in vault; bypasses any proxy set in the environment.
pub fn client(base_url: &str, api_key: &str) -> ObsidianClient {
    let config = ObsidianConfig::new(base_url, api_key).unwrap();
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    ObsidianClient::with_http_client(http, &config)
}
