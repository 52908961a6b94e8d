//! Static tool and prompt descriptors.
//!
//! The set is fixed at startup: two tools and two prompts, both named after
//! the Logseq editor operations they wrap. Tool input schemas are derived
//! from the parameter models so the published schema and the validation
//! logic cannot drift apart.

use std::sync::Arc;

use rmcp::model::{JsonObject, Prompt, PromptArgument, Tool};
use schemars::JsonSchema;

use super::params::{CreatePageParams, InsertBlockParams};

/// Derive an MCP input schema object from a parameter model.
fn input_schema<T: JsonSchema>() -> Arc<JsonObject> {
    match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(serde_json::Value::Object(map)) => Arc::new(map),
        _ => Arc::new(JsonObject::new()),
    }
}

/// Descriptors for the two available tools.
pub fn tool_descriptors() -> Vec<Tool> {
    vec![
        Tool::new(
            "logseq_insert_block",
            "Insert a new block into Logseq. Can create page-level blocks \
             (use is_page_block=true with page name as parent_block), nested \
             blocks under existing blocks, and blocks with custom UUIDs for \
             precise reference. Supports before/after positioning.",
            input_schema::<InsertBlockParams>(),
        ),
        Tool::new(
            "logseq_create_page",
            "Create a new page in Logseq with optional properties. Supports \
             journal page creation, custom page properties (tags, status, \
             etc.), format selection (Markdown/Org-mode), and automatic \
             first block creation.",
            input_schema::<CreatePageParams>(),
        ),
    ]
}

/// Descriptors for the two available prompts.
pub fn prompt_descriptors() -> Vec<Prompt> {
    vec![
        Prompt::new(
            "logseq_insert_block",
            Some("Create a new block in Logseq"),
            Some(vec![
                PromptArgument {
                    name: "parent_block".to_string(),
                    title: None,
                    description: Some(
                        "Parent block UUID or page name (for page blocks)".to_string(),
                    ),
                    required: Some(false),
                },
                PromptArgument {
                    name: "content".to_string(),
                    title: None,
                    description: Some("Block content in Markdown/Org syntax".to_string()),
                    required: Some(true),
                },
                PromptArgument {
                    name: "is_page_block".to_string(),
                    title: None,
                    description: Some("Set true for page-level blocks".to_string()),
                    required: Some(false),
                },
            ]),
        ),
        Prompt::new(
            "logseq_create_page",
            Some("Create a new Logseq page"),
            Some(vec![
                PromptArgument {
                    name: "page_name".to_string(),
                    title: None,
                    description: Some("Name of the page to create".to_string()),
                    required: Some(true),
                },
                PromptArgument {
                    name: "properties".to_string(),
                    title: None,
                    description: Some("Optional page properties as JSON".to_string()),
                    required: Some(false),
                },
                PromptArgument {
                    name: "journal".to_string(),
                    title: None,
                    description: Some("Set true for journal pages".to_string()),
                    required: Some(false),
                },
            ]),
        ),
    ]
}
