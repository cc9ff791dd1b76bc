//! Input guard and entity escaping.
//!
//! Escaping runs exactly once, before any block or inline processing. Every
//! later stage operates on entity-escaped text and introduces HTML only by
//! emitting tags itself; user content is never unescaped.

use crate::error::ConvertError;
use crate::options::ConversionOptions;

/// Rejects input that exceeds the configured size limit.
pub fn check_input_size(input: &str, opts: &ConversionOptions) -> Result<(), ConvertError> {
    if input.len() > opts.max_input_length {
        return Err(ConvertError::InputTooLarge {
            len: input.len(),
            max: opts.max_input_length,
        });
    }
    Ok(())
}

/// Escapes the five HTML-significant characters to their entity forms.
///
/// After this pass a literal `>` arrives at the block segmenter as `&gt;`,
/// which is why blockquote detection matches the entity, not the character.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
