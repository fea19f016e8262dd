//! MCP tool modules.
//!
//! All content tools live in one router; they share the same fail-soft
//! string contract, so there is no per-tool error mapping here.

pub mod content;
