//! Tool handlers for the advice-mind MCP server

pub mod advantage_increment;
pub mod detailed_help;
pub mod generate_advice;
pub mod record_progress;
