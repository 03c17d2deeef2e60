//! MCP server implementation for scad-mcp.
//!
//! This crate wires the OpenSCAD knowledge base and workspace file
//! operations into rmcp tool handlers and exposes the MCP-facing API
//! surface.

mod tools;
pub mod server;

use std::sync::Arc;

use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use scad_core::files::Workspace;

const SERVER_INSTRUCTIONS: &str = r"scad-mcp provides MCP tools for OpenSCAD language reference and workspace file management.

Workflow:
1. Look up language knowledge before writing models:
   - `get_scad_syntax` for the full syntax and language-rule reference.
   - `get_scad_reference` with a `category` (call with no category for the menu).
   - `scad_quick_help` with a `topic` for a short usage snippet.
2. Manage model files in the working directory:
   - `list_files` (optionally filtered by extension, e.g. `scad`).
   - `read_file`, `write_file`, `append_to_file`.

Notes:
- All arguments are strings and optional; an absent argument is treated as empty.
- `write_file` refuses to replace an existing file unless `overwrite` is the string 'true'.
- `append_to_file` only extends existing files and requires non-empty content.
- Every response is plain text; expected failures start with an error marker rather than raising a protocol error.
- `help` lists the available tools. `health` returns `ok`.";

/// MCP server wrapper around the workspace and tool routers.
#[derive(Clone)]
pub struct ScadMcp {
    tool_router: ToolRouter<Self>,
    workspace: Arc<Workspace>,
}

impl ScadMcp {
    /// Creates a new server using a workspace by value.
    #[must_use]
    pub fn new(workspace: Workspace) -> Self {
        Self::with_workspace(Arc::new(workspace))
    }

    /// Creates a new server using a shared workspace handle.
    #[must_use]
    pub fn with_workspace(workspace: Arc<Workspace>) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_files()
            + Self::tool_router_reference()
            + Self::tool_router_context();
        Self {
            tool_router,
            workspace,
        }
    }

    pub(crate) fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl ScadMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for ScadMcp {
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
