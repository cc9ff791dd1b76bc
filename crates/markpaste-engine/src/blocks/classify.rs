use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker, TableRow};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently,
/// without reference to surrounding context. The segmenter (phase 2) decides
/// what the facts mean given the lines around them.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// The full line, minus the trailing newline. Fenced code content is
    /// taken from here so quote markers and indentation survive verbatim.
    pub raw: String,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Number of blockquote `&gt;` prefixes found.
    pub quote_depth: u8,
    /// Line content after stripping quote prefixes (the whole line when
    /// `quote_depth` is 0).
    pub remainder: String,
    /// Leading spaces on the remainder.
    pub indent: usize,
    /// Whether the remainder opens or closes a code fence.
    pub is_fence: bool,
    /// Heading level and text, if the remainder is an ATX heading.
    pub heading: Option<(u8, String)>,
    /// List marker facts, if the remainder is a list item line.
    pub list: Option<ListMarker>,
    /// Table cells, if the remainder contains an unescaped pipe.
    pub cells: Option<Vec<String>>,
}

/// Classifies individual lines for the block segmentation phase.
///
/// Operates on entity-escaped text (see [`crate::escape::escape_html`]).
pub struct LineClassifier;

impl LineClassifier {
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        let is_blank = trimmed.trim().is_empty();

        let (quote_depth, idx) = BlockQuote::strip_prefixes(trimmed);
        let remainder = trimmed[idx..].to_string();
        let indent = remainder.len() - remainder.trim_start_matches(' ').len();

        LineClass {
            raw: trimmed.to_string(),
            is_blank,
            quote_depth,
            indent,
            is_fence: CodeFence::is_fence(&remainder),
            heading: Heading::parse(remainder.trim_start())
                .map(|(level, text)| (level, text.to_string())),
            list: ListMarker::parse(&remainder),
            cells: TableRow::split_cells(&remainder),
            remainder,
        }
    }
}
