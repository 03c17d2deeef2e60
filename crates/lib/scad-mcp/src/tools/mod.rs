//! MCP tool modules.
//!
//! Tools are grouped by domain: workspace file operations, OpenSCAD
//! reference lookup, and contextual help for the tool set itself.

pub mod files;
pub mod reference;
mod context;
