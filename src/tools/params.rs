//! Validated parameter models for the two Logseq operations.
//!
//! Both models use strict schemas: any field not declared here is rejected
//! outright rather than silently dropped. Field-level normalization happens
//! during deserialization: block references shed their `((...))` wrapper and
//! `properties` accepts either a mapping or a serialized JSON object.

use schemars::JsonSchema;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Parameters for inserting a new block in Logseq.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct InsertBlockParams {
    /// UUID or content of the parent block.
    #[schemars(description = "UUID or content of parent block")]
    #[serde(default, deserialize_with = "block_reference")]
    pub parent_block: Option<String>,

    /// Content of the new block.
    #[schemars(description = "Content of the new block")]
    pub content: String,

    /// Whether the block attaches directly to a page.
    #[schemars(description = "Page-level block flag")]
    #[serde(default)]
    pub is_page_block: bool,

    /// Insert before the parent instead of after.
    #[schemars(description = "Insert before parent")]
    #[serde(default)]
    pub before: bool,

    /// Caller-supplied UUID for the new block.
    #[schemars(description = "Custom UUID for block")]
    #[serde(default, deserialize_with = "block_reference")]
    pub custom_uuid: Option<String>,
}

/// Parameters for creating a new page in Logseq.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreatePageParams {
    /// Name of the page to create.
    #[schemars(description = "Name of the page to create")]
    pub page_name: String,

    /// Page properties, passed through or decoded from a JSON string.
    #[schemars(description = "Page properties as a mapping or serialized JSON object")]
    #[serde(default, deserialize_with = "properties_map")]
    pub properties: Map<String, Value>,

    /// Journal page flag.
    #[schemars(description = "Journal page flag")]
    #[serde(default)]
    pub journal: bool,

    /// Page format, markdown or org.
    #[schemars(description = "Page format (markdown or org)")]
    #[serde(default = "default_format")]
    pub format: String,

    /// Create an initial empty block on the page.
    #[schemars(description = "Create initial block")]
    #[serde(default = "default_true")]
    pub create_first_block: bool,
}

fn default_format() -> String {
    "markdown".to_string()
}

fn default_true() -> bool {
    true
}

/// Strip one `((...))` reference wrapper, yielding the bare identifier.
///
/// Any other string passes through unchanged.
pub fn strip_block_ref(value: &str) -> String {
    match value.strip_prefix("((").and_then(|v| v.strip_suffix("))")) {
        Some(inner) => inner.to_string(),
        None => value.to_string(),
    }
}

fn block_reference<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|v| strip_block_ref(&v)))
}

fn properties_map<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(Value::String(raw)) => match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            _ => Err(de::Error::custom("Invalid JSON format for properties")),
        },
        Some(_) => Err(de::Error::custom(
            "properties must be a mapping or a serialized JSON object",
        )),
    }
}
