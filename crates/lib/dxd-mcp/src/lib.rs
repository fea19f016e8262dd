//! MCP server implementation for dxd-mcp.
//!
//! This crate wires the content service into rmcp tool handlers and exposes
//! the MCP-facing tool surface for content retrieval and search.

mod tools;
pub mod server;

use std::sync::Arc;

use dxd_core::ContentService;
use dxd_graphql::GraphQlTransport;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};

const SERVER_INSTRUCTIONS: &str = r"dxd-mcp provides MCP tools for retrieving and searching publication content from a DXD content delivery service.

Tools:
- get_toc: table of contents for a publication.
- get_topic_content_by_id / get_topic_content_by_url: full topic content including the XHTML body, links, and related links.
- search_topics: first ten ranked matches for a search term.
- get_recommendations: recommended topics for a topic key in the format 'ish_<publicationId>-<topicId>-16'.
- health: returns 'ok'.

Notes:
- Every content tool returns a string. '{}' or '[]' means the requested content does not exist; a payload starting with 'Error: [' means the request failed.
- Topic bodies are XHTML; task topics additionally carry their steps.";

/// MCP server wrapper around the content service and tool routers.
#[derive(Clone)]
pub struct DxdMcp<T: GraphQlTransport> {
    tool_router: ToolRouter<Self>,
    service: Arc<ContentService<T>>,
}

impl<T: GraphQlTransport> DxdMcp<T> {
    /// Creates a new server using a content service by value.
    #[must_use]
    pub fn new(service: ContentService<T>) -> Self {
        Self::with_service(Arc::new(service))
    }

    /// Creates a new server using a shared content service handle.
    #[must_use]
    pub fn with_service(service: Arc<ContentService<T>>) -> Self {
        let tool_router = Self::tool_router_core() + Self::tool_router_content();
        Self {
            tool_router,
            service,
        }
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl<T: GraphQlTransport> DxdMcp<T> {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl<T: GraphQlTransport> ServerHandler for DxdMcp<T> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
