//! Logseq MCP server library.
//!
//! Model Context Protocol server exposing two Logseq editing operations
//! (block insertion and page creation) as MCP tools and prompts. Provides the
//! [`server::LogseqMcpServer`] handler, the [`client::LogseqClient`] HTTP API
//! client, and the tool parameter/formatting types. Used by the `logseq-mcp`
//! binary and available for integration testing.

pub mod client;
pub mod config;
pub mod server;
pub mod tools;
