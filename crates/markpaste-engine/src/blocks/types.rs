/// Column alignment parsed from a table separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellAlign {
    #[default]
    None,
    Left,
    Center,
    Right,
}

/// A single list item. Nested lists hang off `children`; ownership is
/// strictly the parent list's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub text: String,
    pub children: Vec<Block>,
}

/// A top-level structural unit of the document.
///
/// Blocks own their content outright; the document is a plain ordered
/// sequence of these, built fresh per conversion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        /// 1 through 6.
        level: u8,
        text: String,
    },
    /// Consecutive non-blank lines; soft breaks between them render as `<br>`.
    Paragraph { lines: Vec<String> },
    /// Fenced code. Content is verbatim (already entity-escaped, never
    /// markdown-processed).
    CodeBlock {
        language: Option<String>,
        content: String,
    },
    /// Code from 4-space indented lines.
    IndentedCode { content: String },
    Blockquote {
        /// Capped at `max_nesting_level`.
        depth: u8,
        children: Vec<Block>,
    },
    List {
        ordered: bool,
        /// Nesting level, 0 for a top-level list. Capped.
        depth: u8,
        items: Vec<ListItem>,
    },
    Table {
        headers: Vec<String>,
        alignments: Vec<CellAlign>,
        rows: Vec<Vec<String>>,
    },
}
