//! Core types and services for scad-mcp.
//!
//! This crate owns the static OpenSCAD knowledge tables, the category and
//! quick-help resolution logic, and the workspace-scoped file operations.
//! Nothing here knows about MCP; the protocol layer lives in `scad-mcp`.

pub mod files;
pub mod knowledge;
pub mod reference;
