use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::ScadMcp;

/// Payload listing the MCP commands this server exposes.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct HelpCommands {
    pub commands: Vec<String>,
}

impl Default for HelpCommands {
    fn default() -> Self {
        Self {
            commands: vec![
                "help - List the MCP commands this server exposes.".to_string(),
                "list_files - List files in the working directory, optionally filtered by extension."
                    .to_string(),
                "read_file - Read and return the content of a file.".to_string(),
                "write_file - Create a file, or replace one when overwrite is 'true'.".to_string(),
                "append_to_file - Append content to the end of an existing file.".to_string(),
                "get_scad_syntax - Full OpenSCAD syntax and language-rule reference.".to_string(),
                "get_scad_reference - Detailed reference by category; empty category lists the menu."
                    .to_string(),
                "scad_quick_help - Short usage snippet for a common topic.".to_string(),
            ],
        }
    }
}

#[tool_router(router = tool_router_context, vis = "pub")]
impl ScadMcp {
    #[tool(description = "List the MCP commands this server exposes.")]
    async fn help(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(HelpCommands::default())?]))
    }
}
