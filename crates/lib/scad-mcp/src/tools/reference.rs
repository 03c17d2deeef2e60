use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use scad_core::reference;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ScadMcp;

/// Parameters for a category reference lookup.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetScadReferenceParams {
    /// Reference category. Empty returns the category menu.
    pub category: Option<String>,
}

/// Parameters for a quick-help lookup.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ScadQuickHelpParams {
    /// Help topic. Empty returns the topic list.
    pub topic: Option<String>,
}

#[tool_router(router = tool_router_reference, vis = "pub")]
impl ScadMcp {
    #[tool(description = "Returns comprehensive OpenSCAD syntax rules and language characteristics.")]
    async fn get_scad_syntax(&self) -> Result<CallToolResult, ErrorData> {
        info!("executing get_scad_syntax");
        Ok(CallToolResult::success(vec![Content::text(
            reference::syntax_reference(),
        )]))
    }

    #[tool(description = "Returns detailed OpenSCAD reference for specific categories.")]
    async fn get_scad_reference(
        &self,
        Parameters(params): Parameters<GetScadReferenceParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let category = params.category.unwrap_or_default();
        info!("executing get_scad_reference with category '{category}'");
        Ok(CallToolResult::success(vec![Content::text(
            reference::resolve_category(&category),
        )]))
    }

    #[tool(description = "Provides quick help for common OpenSCAD topics and functions.")]
    async fn scad_quick_help(
        &self,
        Parameters(params): Parameters<ScadQuickHelpParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let topic = params.topic.unwrap_or_default();
        info!("executing scad_quick_help for '{topic}'");
        Ok(CallToolResult::success(vec![Content::text(
            reference::resolve_quick_help(&topic),
        )]))
    }
}
