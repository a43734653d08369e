//! MCP tool result envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PayrollError;

/// One content item of a tool result. Only text content is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Content type identifier, always `"text"`.
    #[serde(rename = "type")]
    pub content_type: String,
    /// The text payload.
    pub text: String,
}

impl ContentItem {
    /// Creates a text content item.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: text.into(),
        }
    }
}

/// Result of a tool call as returned to the agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Content items of the result.
    pub content: Vec<ContentItem>,
    /// Whether the call failed.
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResult {
    /// Wraps a successful result as pretty-printed JSON text.
    pub fn success(value: &Value) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(text) => Self {
                content: vec![ContentItem::text(text)],
                is_error: false,
            },
            Err(e) => Self::from_error(&PayrollError::from(e)),
        }
    }

    /// Wraps a failure as `"<CODE>: <message>"` text.
    pub fn from_error(error: &PayrollError) -> Self {
        Self {
            content: vec![ContentItem::text(format!("{}: {}", error.code(), error))],
            is_error: true,
        }
    }

    /// The text of the first content item.
    pub fn text(&self) -> &str {
        self.content.first().map_or("", |item| item.text.as_str())
    }
}
