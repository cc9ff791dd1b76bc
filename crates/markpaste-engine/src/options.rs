use serde::{Deserialize, Serialize};

/// Per-call conversion options.
///
/// All fields have conservative defaults; callers usually start from
/// `ConversionOptions::default()` and flip individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Leave `@mention` and `ISSUE-123` shaped tokens as literal text
    /// instead of running them through link rules.
    pub preserve_jira_links: bool,
    /// Pass the assembled HTML through the tag/attribute whitelist filter.
    pub sanitize_html: bool,
    /// Maximum nesting depth for lists and blockquotes. Deeper content is
    /// flattened to this level, never rejected.
    pub max_nesting_level: usize,
    /// Maximum accepted input size in bytes.
    pub max_input_length: usize,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            preserve_jira_links: false,
            sanitize_html: true,
            max_nesting_level: 10,
            max_input_length: 100_000,
        }
    }
}
