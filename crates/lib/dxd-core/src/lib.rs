//! Core content tools for dxd-mcp.
//!
//! Maps tool invocations onto the fixed query template library and projects
//! the polymorphic responses into flat JSON strings, with a fail-soft error
//! contract: every operation returns a string, never an error.

pub mod content;
pub mod project;

pub use content::{ContentService, REQUEST_FAILED};
