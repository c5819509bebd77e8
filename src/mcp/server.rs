//! MCP server shell — session handling over a newline-delimited JSON stream.
//!
//! One request is read, dispatched and answered before the next is read.
//! Remote I/O inside a tool call is awaited, so the runtime stays free for
//! unrelated work while the session waits.

use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::protocol::{error_codes, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION};
use crate::tools::ToolDispatcher;
use crate::types::{Config, Error, Result, ServerConfig};
use crate::vault::ObsidianClient;

/// MCP server
#[derive(Debug)]
pub struct McpServer {
    dispatcher: ToolDispatcher,
    server_info: ServerConfig,
}

impl McpServer {
    pub fn new(dispatcher: ToolDispatcher, server_info: ServerConfig) -> Self {
        Self {
            dispatcher,
            server_info,
        }
    }

    /// Wire the reqwest vault client and the full tool catalog from config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = ObsidianClient::new(&config.obsidian)
            .map_err(|e| Error::config(format!("failed to build HTTP client: {}", e)))?;
        let dispatcher = ToolDispatcher::new(Arc::new(client))?;
        Ok(Self::new(dispatcher, config.server.clone()))
    }

    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }

    /// Handle one raw line. `None` means nothing is written back.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let value = match serde_json::from_str::<Value>(line) {
            Ok(value) => value,
            Err(e) => return Some(parse_error(e)),
        };

        if value.is_array() {
            tracing::warn!("Rejecting JSON-RPC batch");
            return Some(JsonRpcResponse::error(
                None,
                error_codes::INVALID_REQUEST,
                "Batch requests are not supported",
            ));
        }

        let id = value.get("id").cloned();
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                tracing::warn!(error = %e, "Malformed request");
                Some(JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_REQUEST,
                    format!("Invalid request: {}", e),
                ))
            }
        }
    }

    /// Handle a JSON-RPC request. Notifications produce no response.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        tracing::debug!(method = %request.method, "Handling request");

        if request.is_notification() {
            self.handle_notification(&request.method);
            return None;
        }
        let id = request.id.clone();

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                id,
                error_codes::INVALID_REQUEST,
                format!("Unsupported jsonrpc version: {}", request.jsonrpc),
            ));
        }

        let result = match request.method.as_str() {
            "initialize" => Ok(self.handle_initialize(request.params.as_ref())),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(self.handle_tools_list()),
            "tools/call" => self.handle_tools_call(request.params.as_ref()).await,
            "prompts/list" => Ok(json!({ "prompts": [] })),
            "resources/list" => Ok(json!({ "resources": [] })),
            method => {
                return Some(JsonRpcResponse::error(
                    id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("Method not found: {}", method),
                ));
            }
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, e.to_jsonrpc_code(), e.to_string()),
        })
    }

    fn handle_notification(&self, method: &str) {
        match method {
            "notifications/initialized" => tracing::info!("MCP session initialized"),
            "notifications/cancelled" => {
                tracing::debug!("Cancellation ignored: requests are handled one at a time")
            }
            other => tracing::debug!(method = other, "Ignoring notification"),
        }
    }

    fn handle_initialize(&self, params: Option<&Value>) -> Value {
        let client = params
            .and_then(|p| p.get("clientInfo"))
            .and_then(|c| c.get("name"))
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        tracing::info!(client, "MCP server initializing");

        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": { "listChanged": false },
                "prompts": { "listChanged": false },
                "resources": { "subscribe": false, "listChanged": false }
            },
            "serverInfo": {
                "name": self.server_info.name,
                "version": self.server_info.version
            }
        })
    }

    fn handle_tools_list(&self) -> Value {
        let tools: Vec<Value> = self
            .dispatcher
            .catalog()
            .list()
            .iter()
            .map(|descriptor| descriptor.to_listing())
            .collect();

        json!({ "tools": tools })
    }

    async fn handle_tools_call(&self, params: Option<&Value>) -> Result<Value> {
        let params = params.ok_or_else(|| Error::invalid_arguments("Missing params"))?;
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::invalid_arguments("Missing tool name"))?;

        let result = self.dispatcher.call(name, params.get("arguments")).await?;
        Ok(serde_json::to_value(result)?)
    }

    /// Serve one session until EOF on `reader`.
    ///
    /// Lines are read as raw bytes so that invalid UTF-8 is answered with a
    /// parse error instead of ending the session.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    tracing::debug!("Received: {}", line);
                    self.handle_line(line).await
                }
                Err(e) => Some(parse_error(e)),
            };

            let Some(response) = response else {
                continue;
            };
            let response_str = serde_json::to_string(&response)?;

            tracing::debug!("Sending: {}", response_str);

            writer.write_all(response_str.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        tracing::info!("Input closed, ending MCP session");
        Ok(())
    }

    /// Run the server on stdio
    pub async fn run_stdio(&self) -> Result<()> {
        tracing::info!("Starting MCP server on stdio");
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }
}

fn parse_error(e: impl std::fmt::Display) -> JsonRpcResponse {
    tracing::warn!(error = %e, "Unparseable message");
    JsonRpcResponse::error(None, error_codes::PARSE_ERROR, format!("Parse error: {}", e))
}
