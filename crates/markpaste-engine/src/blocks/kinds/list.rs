/// List marker syntax knowledge.
///
/// `marker_width` is the full width of the marker plus the whitespace that
/// follows it; the segmenter uses the first item's width as the indentation
/// unit when mapping indent to nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker {
    pub ordered: bool,
    /// Leading spaces before the marker.
    pub indent: usize,
    /// Bytes consumed by the marker and its trailing whitespace.
    pub marker_width: usize,
    /// Item text after the marker.
    pub text: String,
}

impl ListMarker {
    pub const UNORDERED: [char; 3] = ['-', '*', '+'];

    /// Parses `- text`, `* text`, `+ text` or `N. text` with optional
    /// leading indentation. Returns `None` for anything else.
    pub fn parse(line: &str) -> Option<ListMarker> {
        let indent = line.len() - line.trim_start_matches(' ').len();
        let rest = &line[indent..];

        let (ordered, after_marker) = if let Some(c) = rest.chars().next()
            && Self::UNORDERED.contains(&c)
        {
            (false, &rest[c.len_utf8()..])
        } else {
            let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
            if digits == 0 || !rest[digits..].starts_with('.') {
                return None;
            }
            (true, &rest[digits + 1..])
        };

        // A marker must be followed by whitespace and some text.
        let spaces = after_marker.len() - after_marker.trim_start_matches(' ').len();
        if spaces == 0 {
            return None;
        }
        let text = after_marker[spaces..].trim_end();
        if text.is_empty() {
            return None;
        }

        Some(ListMarker {
            ordered,
            indent,
            marker_width: rest.len() - after_marker.len() + spaces,
            text: text.to_string(),
        })
    }
}
