//! Markdown-to-HTML conversion engine for pasting into rich-text comment
//! surfaces.
//!
//! The engine is a pure, synchronous function: identical input and options
//! always produce identical HTML (only the reported duration varies). It
//! performs no I/O and holds no state across calls, so concurrent use from
//! isolated contexts needs no locking. Pathological inputs are bounded by
//! construction via the input-length and nesting-depth caps.

pub mod blocks;
pub mod error;
pub mod escape;
pub mod inline;
pub mod options;
pub mod render;
pub mod stats;

use std::time::Instant;

pub use blocks::{Block, CellAlign, ListItem};
pub use error::{ConvertError, Warning};
pub use inline::InlineNode;
pub use options::ConversionOptions;
pub use stats::ConversionStats;

/// The outcome of a successful conversion: the HTML fragment, a statistics
/// summary, and any non-fatal conditions that were tolerated.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub html: String,
    pub stats: ConversionStats,
    pub warnings: Vec<Warning>,
}

/// Converts markdown to an HTML fragment.
///
/// Fails only on oversized input or an internal error; every other problem
/// degrades to best-effort HTML plus a [`Warning`].
pub fn convert(
    markdown: &str,
    options: &ConversionOptions,
) -> Result<ConversionResult, ConvertError> {
    let start = Instant::now();

    escape::check_input_size(markdown, options)?;
    let escaped = escape::escape_html(markdown);

    let mut warnings = Vec::new();
    let blocks = blocks::segment(&escaped, options, &mut warnings);
    let mut html = render::render(&blocks, options, &mut warnings);
    if options.sanitize_html {
        html = render::sanitize(&html);
    }

    // Escaping expands at most 6x and tags add a bounded constant per line,
    // so an output far past this bound means something went badly wrong.
    let bound = markdown.len().saturating_mul(64).max(4096);
    if html.len() > bound {
        return Err(ConvertError::Internal(format!(
            "output size {} exceeded safety bound {bound}",
            html.len()
        )));
    }

    let stats = stats::collect(markdown, &html, start.elapsed());
    Ok(ConversionResult {
        html,
        stats,
        warnings,
    })
}
