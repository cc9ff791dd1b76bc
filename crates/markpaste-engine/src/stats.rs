//! Conversion statistics.
//!
//! A pure function over the original input, the final HTML, and the
//! measured duration. Counts on the input side are naive regex scans of
//! the markdown source; `element_count` counts opening tags in the output.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionStats {
    pub processing_time_ms: f64,
    pub element_count: usize,
    pub header_count: usize,
    pub link_count: usize,
    pub code_block_count: usize,
    pub inline_code_count: usize,
    pub input_length: usize,
    pub output_length: usize,
}

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s").unwrap());
static EXPLICIT_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]\([^)]*\)").unwrap());
static FENCE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*`{3,}").unwrap());
static INDENTED_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(?:^ {4,}\S.*\n?)+").unwrap());
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`\n]+`").unwrap());
static OPENING_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[a-z][a-z0-9]*").unwrap());

pub fn collect(input: &str, html: &str, elapsed: Duration) -> ConversionStats {
    let fence_lines = FENCE_LINE.find_iter(input).count();
    // An odd fence count means one unterminated block.
    let fenced_blocks = fence_lines.div_ceil(2);
    let indented_blocks = INDENTED_RUN.find_iter(input).count();

    ConversionStats {
        processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        element_count: OPENING_TAG.find_iter(html).count(),
        header_count: HEADING.find_iter(input).count(),
        link_count: EXPLICIT_LINK.find_iter(input).count(),
        code_block_count: fenced_blocks + indented_blocks,
        inline_code_count: INLINE_CODE.find_iter(input).count(),
        input_length: input.len(),
        output_length: html.len(),
    }
}
