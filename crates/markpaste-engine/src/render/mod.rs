//! # Output Assembly
//!
//! Serializes the block sequence into one HTML string, one top-level
//! element per block in document order. Leaf text goes through the inline
//! parser here; verbatim code content is emitted as-is (it was entity
//! escaped by the preprocessor and never markdown-processed).
//!
//! The output is theme-neutral semantic HTML: no inline styles, and the
//! only class ever emitted is `language-<lang>` on fenced code.

pub mod sanitize;

use crate::blocks::{Block, CellAlign, ListItem};
use crate::error::Warning;
use crate::inline::{InlineNode, InlineParser};
use crate::options::ConversionOptions;

pub use sanitize::sanitize;

/// Renders the document to HTML. Inline parsing may record warnings
/// (e.g. rejected link schemes).
pub fn render(blocks: &[Block], opts: &ConversionOptions, warnings: &mut Vec<Warning>) -> String {
    let rendered: Vec<String> = blocks
        .iter()
        .map(|b| render_block(b, opts, warnings))
        .collect();
    rendered.join("\n")
}

fn render_block(block: &Block, opts: &ConversionOptions, warnings: &mut Vec<Warning>) -> String {
    match block {
        Block::Heading { level, text } => {
            format!(
                "<h{level}>{}</h{level}>",
                render_inline(text, opts, warnings)
            )
        }
        Block::Paragraph { lines } => {
            let inner: Vec<String> = lines
                .iter()
                .map(|l| render_inline(l, opts, warnings))
                .collect();
            format!("<p>{}</p>", inner.join("<br>"))
        }
        Block::CodeBlock { language, content } => match language {
            Some(lang) => format!("<pre><code class=\"language-{lang}\">{content}</code></pre>"),
            None => format!("<pre><code>{content}</code></pre>"),
        },
        Block::IndentedCode { content } => format!("<pre><code>{content}</code></pre>"),
        Block::Blockquote { depth, children } => {
            let inner = render(children, opts, warnings);
            let mut out = String::new();
            for _ in 0..*depth {
                out.push_str("<blockquote>");
            }
            out.push_str(&inner);
            for _ in 0..*depth {
                out.push_str("</blockquote>");
            }
            out
        }
        Block::List { ordered, items, .. } => render_list(*ordered, items, opts, warnings),
        Block::Table {
            headers,
            alignments,
            rows,
        } => render_table(headers, alignments, rows, opts, warnings),
    }
}

fn render_list(
    ordered: bool,
    items: &[ListItem],
    opts: &ConversionOptions,
    warnings: &mut Vec<Warning>,
) -> String {
    let tag = if ordered { "ol" } else { "ul" };
    let mut out = format!("<{tag}>");
    for item in items {
        out.push_str("<li>");
        out.push_str(&render_inline(&item.text, opts, warnings));
        for child in &item.children {
            out.push_str(&render_block(child, opts, warnings));
        }
        out.push_str("</li>");
    }
    out.push_str(&format!("</{tag}>"));
    out
}

fn render_table(
    headers: &[String],
    alignments: &[CellAlign],
    rows: &[Vec<String>],
    opts: &ConversionOptions,
    warnings: &mut Vec<Warning>,
) -> String {
    let align_attr = |i: usize| match alignments.get(i).copied().unwrap_or_default() {
        CellAlign::None => String::new(),
        CellAlign::Left => " align=\"left\"".to_string(),
        CellAlign::Center => " align=\"center\"".to_string(),
        CellAlign::Right => " align=\"right\"".to_string(),
    };

    let mut out = String::from("<table><thead><tr>");
    for (i, h) in headers.iter().enumerate() {
        out.push_str(&format!(
            "<th{}>{}</th>",
            align_attr(i),
            render_inline(h, opts, warnings)
        ));
    }
    out.push_str("</tr></thead><tbody>");
    for row in rows {
        out.push_str("<tr>");
        for (i, cell) in row.iter().enumerate() {
            out.push_str(&format!(
                "<td{}>{}</td>",
                align_attr(i),
                render_inline(cell, opts, warnings)
            ));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

fn render_inline(text: &str, opts: &ConversionOptions, warnings: &mut Vec<Warning>) -> String {
    let nodes = InlineParser::new(opts, warnings).parse(text);
    inline_to_html(&nodes)
}

fn inline_to_html(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            InlineNode::Text(t) => out.push_str(t),
            InlineNode::Code(c) => out.push_str(&format!("<code>{c}</code>")),
            InlineNode::Strong(children) => {
                out.push_str(&format!("<strong>{}</strong>", inline_to_html(children)))
            }
            InlineNode::Emph(children) => {
                out.push_str(&format!("<em>{}</em>", inline_to_html(children)))
            }
            InlineNode::Strike(children) => {
                out.push_str(&format!("<del>{}</del>", inline_to_html(children)))
            }
            InlineNode::Link { href, children } => out.push_str(&format!(
                "<a href=\"{href}\">{}</a>",
                inline_to_html(children)
            )),
            InlineNode::Autolink { href, label } => {
                out.push_str(&format!("<a href=\"{href}\">{label}</a>"))
            }
        }
    }
    out
}
