//! Formatting of Logseq API responses into readable text.
//!
//! Total functions: missing fields render as placeholders instead of
//! failing, since the remote response carries no schema guarantee.

use serde_json::Value;

/// Format a block creation result into readable text.
pub fn format_block_result(result: &Value) -> String {
    let page = result
        .pointer("/page/name")
        .and_then(Value::as_str)
        .unwrap_or("unknown page");
    let parent = result
        .pointer("/parent/uuid")
        .and_then(Value::as_str)
        .filter(|uuid| !uuid.is_empty())
        .unwrap_or("None");

    format!(
        "Created block in {page}\nUUID: {uuid}\nContent: {content}\nParent: {parent}",
        uuid = field_text(result, "uuid"),
        content = field_text(result, "content"),
    )
}

/// Format a page creation result into readable text.
pub fn format_page_result(result: &Value) -> String {
    // Journal flag renders as True/False, which callers match on.
    let journal = if result
        .get("journal")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        "True"
    } else {
        "False"
    };
    let blocks = result
        .get("blocks")
        .and_then(Value::as_array)
        .map(|blocks| blocks.len())
        .unwrap_or(0);

    format!(
        "Created page: {name}\nUUID: {uuid}\nJournal: {journal}\nBlocks: {blocks}",
        name = field_text(result, "name"),
        uuid = field_text(result, "uuid"),
    )
}

fn field_text<'a>(result: &'a Value, key: &str) -> &'a str {
    result.get(key).and_then(Value::as_str).unwrap_or("None")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_block_result_complete() {
        let result = json!({
            "uuid": "u1",
            "content": "hello",
            "page": { "name": "P" },
            "parent": { "uuid": "parent-1" },
        });
        let text = format_block_result(&result);
        assert!(text.contains("Created block in P"));
        assert!(text.contains("UUID: u1"));
        assert!(text.contains("Content: hello"));
        assert!(text.contains("Parent: parent-1"));
    }

    #[test]
    fn test_format_block_result_missing_parent_renders_none() {
        let result = json!({
            "uuid": "u1",
            "content": "hello",
            "page": { "name": "P" },
        });
        let text = format_block_result(&result);
        assert!(text.contains("Parent: None"));
    }

    #[test]
    fn test_format_block_result_empty_response() {
        let text = format_block_result(&json!({}));
        assert!(text.contains("Created block in unknown page"));
        assert!(text.contains("UUID: None"));
        assert!(text.contains("Content: None"));
        assert!(text.contains("Parent: None"));
    }

    #[test]
    fn test_format_page_result_complete() {
        let result = json!({
            "name": "Test",
            "uuid": "p1",
            "journal": true,
            "blocks": [{}, {}, {}],
        });
        let text = format_page_result(&result);
        assert!(text.contains("Created page: Test"));
        assert!(text.contains("UUID: p1"));
        assert!(text.contains("Journal: True"));
        assert!(text.contains("Blocks: 3"));
    }

    #[test]
    fn test_format_page_result_defaults() {
        let text = format_page_result(&json!({ "name": "Test", "uuid": "p1" }));
        assert!(text.contains("Journal: False"));
        assert!(text.contains("Blocks: 0"));
    }

    #[test]
    fn test_format_page_result_non_journal_with_blocks() {
        let result = json!({ "name": "Test", "uuid": "p1", "blocks": [{}, {}] });
        let text = format_page_result(&result);
        assert!(text.contains("Created page: Test"));
        assert!(text.contains("UUID: p1"));
        assert!(text.contains("Journal: False"));
        assert!(text.contains("Blocks: 2"));
    }
}
