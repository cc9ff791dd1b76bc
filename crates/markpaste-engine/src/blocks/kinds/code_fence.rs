/// Fenced code block syntax knowledge: opener/closer detection and the
/// optional language token.
pub struct CodeFence;

impl CodeFence {
    pub const TICKS: &'static str = "```";

    /// Returns true if the line opens (or closes) a fence: three or more
    /// backticks after optional indentation.
    pub fn is_fence(line: &str) -> bool {
        line.trim_start().starts_with(Self::TICKS)
    }

    /// Returns true if the line closes an open fence: backticks only,
    /// nothing after them.
    pub fn is_closer(line: &str) -> bool {
        let t = line.trim();
        t.starts_with(Self::TICKS) && t.chars().all(|c| c == '`')
    }

    /// Extracts the language token from an opener line, if any.
    pub fn language(line: &str) -> Option<String> {
        let t = line.trim_start().trim_start_matches('`');
        let lang = t.trim();
        if lang.is_empty() {
            None
        } else {
            Some(lang.split_whitespace().next().unwrap_or(lang).to_string())
        }
    }
}
