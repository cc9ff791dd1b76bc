/// Blockquote syntax knowledge.
///
/// The preprocessor has already entity-escaped the input, so quote markers
/// arrive as `&gt;` rather than a literal `>`.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: &'static str = "&gt;";

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles `&gt; text`, `&gt;&gt; nested` and `&gt; &gt; spaced nested`.
    /// Depth 0 means the line is not a blockquote line.
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let mut i = 0usize;
        let mut depth = 0u8;

        loop {
            // Only commit the space skip if a marker actually follows;
            // otherwise leading spaces stay part of the remainder so the
            // classifier can measure indentation.
            let mut j = i;
            while s[j..].starts_with(' ') {
                j += 1;
            }
            if s[j..].starts_with(Self::PREFIX) {
                depth = depth.saturating_add(1);
                i = j + Self::PREFIX.len();
                if s[i..].starts_with(' ') {
                    i += 1;
                }
            } else {
                break;
            }
        }
        (depth, i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefixes("hello"), (0, 0));
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefixes("&gt; hello"), (1, 5));
    }

    #[test]
    fn strip_spaced_nested_quote() {
        let (depth, idx) = BlockQuote::strip_prefixes("&gt; &gt; hello");
        assert_eq!(depth, 2);
        assert_eq!(&"&gt; &gt; hello"[idx..], "hello");
    }

    #[test]
    fn strip_nested_quote_no_space() {
        let (depth, idx) = BlockQuote::strip_prefixes("&gt;&gt; hello");
        assert_eq!(depth, 2);
        assert_eq!(&"&gt;&gt; hello"[idx..], "hello");
    }

    #[test]
    fn indented_non_quote_keeps_its_spaces() {
        assert_eq!(BlockQuote::strip_prefixes("    let a = 1;"), (0, 0));
    }

    #[test]
    fn quoted_indented_code_keeps_inner_spaces() {
        let (depth, idx) = BlockQuote::strip_prefixes("&gt;     code");
        assert_eq!(depth, 1);
        assert_eq!(&"&gt;     code"[idx..], "    code");
    }

    #[test]
    fn literal_gt_mid_line_is_not_a_quote() {
        assert_eq!(BlockQuote::strip_prefixes("a &gt; b"), (0, 0));
    }
}
