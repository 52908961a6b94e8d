//! MCP tool parameter models, descriptors, and result formatting.
//!
//! Parameter structs derive `Deserialize + JsonSchema` so the registry can
//! publish their JSON Schemas for MCP tool registration. Formatters are pure
//! functions over the raw Logseq API response.

pub mod format;
pub mod params;
pub mod registry;

pub use format::{format_block_result, format_page_result};
pub use params::{CreatePageParams, InsertBlockParams};
