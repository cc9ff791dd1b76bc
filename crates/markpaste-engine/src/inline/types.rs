/// A parsed inline node.
///
/// Nodes own their content; delimiters are consumed during parsing and do
/// not reappear in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text (already entity-escaped by the preprocessor).
    Text(String),
    /// A code span. Raw zone: the content was excluded from every other
    /// inline rule.
    Code(String),
    Strong(Vec<InlineNode>),
    Emph(Vec<InlineNode>),
    Strike(Vec<InlineNode>),
    /// An explicit `[text](url)` link with a validated scheme.
    Link {
        href: String,
        children: Vec<InlineNode>,
    },
    /// A bare URL or email promoted to a link; `label` is the visible text.
    Autolink { href: String, label: String },
}
