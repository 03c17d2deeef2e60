use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ScadMcp;

/// Parameters for listing files in the working directory.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ListFilesParams {
    /// Extension to filter by, without the leading dot. Empty lists all files.
    pub file_extension: Option<String>,
}

/// Parameters for reading a file.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ReadFileParams {
    pub filename: Option<String>,
}

/// Parameters for writing a file.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct WriteFileParams {
    pub filename: Option<String>,
    pub content: Option<String>,
    /// The string 'true' (any case) allows replacing an existing file;
    /// anything else refuses.
    pub overwrite: Option<String>,
}

/// Parameters for appending to an existing file.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AppendToFileParams {
    pub filename: Option<String>,
    pub content: Option<String>,
}

/// Parses the wire-level overwrite flag. Only the literal "true" (after
/// trimming, case-insensitive) enables overwriting.
fn parse_overwrite(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

#[tool_router(router = tool_router_files, vis = "pub")]
impl ScadMcp {
    #[tool(description = "Lists files in the working directory, optionally filtering by extension.")]
    async fn list_files(
        &self,
        Parameters(params): Parameters<ListFilesParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let extension = params.file_extension.unwrap_or_default();
        info!("executing list_files with extension '{extension}'");
        let outcome = self.workspace().list_files(&extension);
        Ok(CallToolResult::success(vec![Content::text(outcome.render())]))
    }

    #[tool(description = "Reads and returns the content of a specified file.")]
    async fn read_file(
        &self,
        Parameters(params): Parameters<ReadFileParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let filename = params.filename.unwrap_or_default();
        info!("executing read_file for '{filename}'");
        let outcome = self.workspace().read_file(&filename);
        Ok(CallToolResult::success(vec![Content::text(outcome.render())]))
    }

    #[tool(
        description = "Creates a new file with content, with an option to overwrite if it exists."
    )]
    async fn write_file(
        &self,
        Parameters(params): Parameters<WriteFileParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let filename = params.filename.unwrap_or_default();
        let content = params.content.unwrap_or_default();
        let overwrite = parse_overwrite(&params.overwrite.unwrap_or_default());
        info!("executing write_file for '{filename}' (overwrite: {overwrite})");
        let outcome = self.workspace().write_file(&filename, &content, overwrite);
        Ok(CallToolResult::success(vec![Content::text(outcome.render())]))
    }

    #[tool(description = "Appends content to the end of an existing file.")]
    async fn append_to_file(
        &self,
        Parameters(params): Parameters<AppendToFileParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let filename = params.filename.unwrap_or_default();
        let content = params.content.unwrap_or_default();
        info!("executing append_to_file for '{filename}'");
        let outcome = self.workspace().append_to_file(&filename, &content);
        Ok(CallToolResult::success(vec![Content::text(outcome.render())]))
    }
}

#[cfg(test)]
mod tests {
    use super::parse_overwrite;

    #[test]
    fn overwrite_flag_accepts_only_true() {
        assert!(parse_overwrite("true"));
        assert!(parse_overwrite(" TRUE "));
        assert!(parse_overwrite("True"));

        assert!(!parse_overwrite(""));
        assert!(!parse_overwrite("false"));
        assert!(!parse_overwrite("yes"));
        assert!(!parse_overwrite("1"));
    }
}
