//! Tool handlers for the sequential-tools MCP server

pub mod available_tools;
pub mod clear_history;
pub mod sequential_thinking;
