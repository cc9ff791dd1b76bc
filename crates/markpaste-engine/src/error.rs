use thiserror::Error;

/// Fatal conversion failures. Everything else degrades to best-effort
/// output plus a [`Warning`] entry.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input is {len} bytes, limit is {max}")]
    InputTooLarge { len: usize, max: usize },
    #[error("internal conversion error: {0}")]
    Internal(String),
}

/// Non-fatal conditions tolerated during conversion.
///
/// Each variant corresponds to a degradation the pipeline applied instead
/// of failing: the HTML output is still produced, and the warning records
/// what was tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    /// A link target used a scheme outside the allowed set; the match was
    /// demoted to literal text.
    #[error("unsafe link target rejected: {url}")]
    UnsafeUrl { url: String },
    /// A table row had a different cell count than the header row; it was
    /// padded with empty cells.
    #[error("table row {row} has a ragged cell count, padded")]
    MalformedTable { row: usize },
    /// A fenced code block had no closing fence and ran to end of input.
    #[error("unterminated code fence runs to end of input")]
    UnterminatedFence,
}
