//! MCP ServerHandler implementation for Logseq.
//!
//! Exposes two operations over both MCP surfaces:
//!
//! **Tools**
//! - `logseq_insert_block`: insert a block under a page or another block
//! - `logseq_create_page`: create a page with optional properties
//!
//! **Prompts** (same names)
//! - Conversational variants of the two operations with a lighter argument
//!   check. Failures on the prompt path surface as message text in a
//!   successful response, not as protocol errors; the tool path raises
//!   protocol errors.

use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, GetPromptRequestParams, GetPromptResult,
    Implementation, JsonObject, ListPromptsResult, ListToolsResult, PaginatedRequestParams,
    PromptMessage, PromptMessageRole, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData as McpError, ServerHandler};
use serde_json::{json, Map, Value};

use crate::client::{ClientError, ClientResult, LogseqClient};
use crate::config::ServerConfig;
use crate::tools::params::{CreatePageParams, InsertBlockParams};
use crate::tools::registry;
use crate::tools::{format_block_result, format_page_result};

/// Logseq MCP server handler.
#[derive(Debug, Clone)]
pub struct LogseqMcpServer {
    client: LogseqClient,
}

impl LogseqMcpServer {
    /// Create a server backed by the given startup configuration.
    pub fn new(config: &ServerConfig) -> ClientResult<Self> {
        Ok(Self {
            client: LogseqClient::new(config)?,
        })
    }

    async fn insert_block_tool(&self, arguments: JsonObject) -> Result<String, McpError> {
        let params: InsertBlockParams = serde_json::from_value(Value::Object(arguments))
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        if params.content.trim().is_empty() {
            return Err(McpError::invalid_params(
                "Content cannot be empty".to_string(),
                None,
            ));
        }

        let args = [
            json!(params.parent_block),
            json!(params.content),
            json!({
                "isPageBlock": params.is_page_block,
                "before": params.before,
                "customUUID": params.custom_uuid,
            }),
        ];

        let result = self
            .client
            .call("logseq.Editor.insertBlock", &args)
            .await
            .map_err(client_error)?;

        Ok(format_block_result(&result))
    }

    async fn create_page_tool(&self, arguments: JsonObject) -> Result<String, McpError> {
        let params: CreatePageParams = serde_json::from_value(Value::Object(arguments))
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let args = [
            json!(params.page_name),
            Value::Object(params.properties),
            json!({
                "journal": params.journal,
                "format": params.format,
                "createFirstBlock": params.create_first_block,
            }),
        ];

        let result = self
            .client
            .call("logseq.Editor.createPage", &args)
            .await
            .map_err(client_error)?;

        Ok(format_page_result(&result))
    }

    /// Prompt-path block insertion: presence check on `content` only, and
    /// the remote options object carries just the page-block flag.
    async fn insert_block_prompt(&self, arguments: &JsonObject) -> Result<GetPromptResult, String> {
        let content = arguments
            .get("content")
            .and_then(Value::as_str)
            .ok_or_else(|| "Content is required for block creation".to_string())?;

        let parent_block = arguments
            .get("parent_block")
            .cloned()
            .unwrap_or(Value::Null);
        let is_page_block = arguments
            .get("is_page_block")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let args = [
            parent_block,
            json!(content),
            json!({ "isPageBlock": is_page_block }),
        ];

        let result = self
            .client
            .call("logseq.Editor.insertBlock", &args)
            .await
            .map_err(|e| e.to_string())?;

        Ok(GetPromptResult {
            description: Some(format!("Created block: {content}")),
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                format_block_result(&result),
            )],
        })
    }

    /// Prompt-path page creation: presence check on `page_name` only.
    async fn create_page_prompt(&self, arguments: &JsonObject) -> Result<GetPromptResult, String> {
        let page_name = arguments
            .get("page_name")
            .and_then(Value::as_str)
            .ok_or_else(|| "Page name is required".to_string())?;

        let properties = match arguments.get("properties") {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(map)) => map.clone(),
            Some(Value::String(raw)) => match serde_json::from_str::<Value>(raw) {
                Ok(Value::Object(map)) => map,
                _ => return Err("Invalid JSON format for properties".to_string()),
            },
            Some(_) => return Err("Invalid JSON format for properties".to_string()),
        };
        let journal = arguments
            .get("journal")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let args = [
            json!(page_name),
            Value::Object(properties),
            json!({ "journal": journal }),
        ];

        let result = self
            .client
            .call("logseq.Editor.createPage", &args)
            .await
            .map_err(|e| e.to_string())?;

        Ok(GetPromptResult {
            description: Some(format!("Created page: {page_name}")),
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                format_page_result(&result),
            )],
        })
    }
}

impl ServerHandler for LogseqMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "logseq-mcp".to_string(),
                title: Some("Logseq MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server exposing Logseq block and page editing over the \
                     local Logseq HTTP API"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Logseq is an outliner-style note-taking application. Use \
                 logseq_insert_block to add a block under a page or another \
                 block (pass is_page_block=true with the page name as \
                 parent_block for top-level blocks), and logseq_create_page to \
                 create a page with optional properties, journal flag, and \
                 format. Block references of the form ((uuid)) are accepted \
                 and unwrapped automatically."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            meta: None,
            next_cursor: None,
            tools: registry::tool_descriptors(),
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();

        let text = match request.name.as_ref() {
            "logseq_insert_block" => self.insert_block_tool(arguments).await?,
            "logseq_create_page" => self.create_page_tool(arguments).await?,
            other => {
                return Err(McpError::invalid_params(
                    format!("Unknown tool: {other}"),
                    None,
                ))
            }
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            meta: None,
            next_cursor: None,
            prompts: registry::prompt_descriptors(),
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();

        // Every failure on this path, the empty-arguments check included,
        // is reported as message content in a successful response.
        if arguments.is_empty() {
            return Ok(failure_prompt_result("Missing arguments"));
        }

        let outcome = match request.name.as_ref() {
            "logseq_insert_block" => self.insert_block_prompt(&arguments).await,
            "logseq_create_page" => self.create_page_prompt(&arguments).await,
            other => Err(format!("Unknown prompt: {other}")),
        };

        Ok(outcome.unwrap_or_else(|message| failure_prompt_result(&message)))
    }
}

/// Map a client error to an internal protocol error carrying its message.
fn client_error(err: ClientError) -> McpError {
    McpError::internal_error(err.to_string(), None)
}

/// Build the well-formed "failure as content" prompt response.
fn failure_prompt_result(message: &str) -> GetPromptResult {
    GetPromptResult {
        description: Some(format!("Operation failed: {message}")),
        messages: vec![PromptMessage::new_text(
            PromptMessageRole::User,
            message.to_string(),
        )],
    }
}
