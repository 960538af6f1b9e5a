use super::protocol::{
    CallToolParams, JsonRpcRequest, JsonRpcResponse, INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR,
    PROTOCOL_VERSION,
};
use crate::domain::entities::tool::ToolDefinition;
use crate::domain::error::DomainError;
use crate::domain::ports::tool_host::{ToolHandler, ToolHost};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

struct RegisteredTool {
    definition: ToolDefinition,
    handler: Arc<dyn ToolHandler>,
}

/// MCP server speaking newline-delimited JSON-RPC.
pub struct McpServer {
    name: String,
    version: String,
    tools: Vec<RegisteredTool>,
}

impl ToolHost for McpServer {
    fn register_tool(&mut self, definition: ToolDefinition, handler: Arc<dyn ToolHandler>) {
        self.tools.push(RegisteredTool { definition, handler });
    }
}

impl McpServer {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            tools: Vec::new(),
        }
    }

    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition.clone()).collect()
    }

    pub async fn run_stdio(self) -> Result<(), DomainError> {
        info!(server = %self.name, tools = self.tools.len(), "serving MCP on stdio");
        Arc::new(self)
            .serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Reads requests until the input closes, answering each on its own task.
    /// Returns once every in-flight request has been answered.
    pub async fn serve<R, W>(self: Arc<Self>, reader: R, mut writer: W) -> Result<(), DomainError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<JsonRpcResponse>();
        let mut tx = Some(tx);
        let mut lines = reader.lines();

        loop {
            tokio::select! {
                line = lines.next_line(), if tx.is_some() => match line? {
                    Some(line) if line.trim().is_empty() => {}
                    Some(line) => {
                        let server = Arc::clone(&self);
                        let Some(sender) = tx.clone() else { continue };
                        tokio::spawn(async move {
                            if let Some(response) = server.handle_line(&line).await {
                                let _ = sender.send(response);
                            }
                        });
                    }
                    None => {
                        debug!("input closed, draining in-flight requests");
                        tx = None;
                    }
                },
                response = rx.recv() => match response {
                    Some(response) => {
                        let mut out = serde_json::to_string(&response)?;
                        out.push('\n');
                        writer.write_all(out.as_bytes()).await?;
                        writer.flush().await?;
                    }
                    None => break,
                },
            }
        }
        Ok(())
    }

    /// Handles one raw message. Notifications produce no response.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                warn!("unparseable message: {e}");
                Some(JsonRpcResponse::error(Value::Null, PARSE_ERROR, format!("Parse error: {e}")))
            }
        }
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id else {
            debug!(method = %request.method, "notification");
            return None;
        };
        debug!(method = %request.method, "request");

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::result(id, self.initialize_result(&request.params)),
            "ping" => JsonRpcResponse::result(id, json!({})),
            "tools/list" => JsonRpcResponse::result(id, json!({ "tools": self.tool_definitions() })),
            "tools/call" => self.call_tool(id, request.params).await,
            other => JsonRpcResponse::error(id, METHOD_NOT_FOUND, format!("Method not found: {other}")),
        };
        Some(response)
    }

    fn initialize_result(&self, params: &Value) -> Value {
        let protocol_version = params
            .get("protocolVersion")
            .and_then(Value::as_str)
            .unwrap_or(PROTOCOL_VERSION);
        json!({
            "protocolVersion": protocol_version,
            "capabilities": { "tools": {} },
            "serverInfo": { "name": self.name, "version": self.version },
        })
    }

    async fn call_tool(&self, id: Value, params: Value) -> JsonRpcResponse {
        let params: CallToolParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Invalid params: {e}")),
        };
        let Some(tool) = self.tools.iter().find(|t| t.definition.name == params.name) else {
            return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Unknown tool: {}", params.name));
        };

        let result = tool.handler.call(params.arguments).await;
        match serde_json::to_value(&result) {
            Ok(value) => JsonRpcResponse::result(id, value),
            Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, format!("Unencodable result: {e}")),
        }
    }
}
