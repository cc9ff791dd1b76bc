use regex::Regex;
use std::sync::LazyLock;

/// Link and autolink knowledge: explicit link delimiters, the allowed
/// scheme set, and the token patterns for bare URLs, emails, mentions and
/// issue keys.
pub struct LinkRules;

impl LinkRules {
    pub const OPEN: u8 = b'[';
    pub const MID: &'static str = "](";
    pub const CLOSE: u8 = b')';

    /// Returns true when the URL starts with an allowed scheme. Anything
    /// else, including scheme-less URLs, is rejected.
    pub fn scheme_allowed(url: &str) -> bool {
        let lower = url.trim_start().to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("mailto:")
    }

    /// Trims trailing sentence punctuation (and trailing escape entities)
    /// off an autolinked URL match.
    pub fn trim_url_tail(url: &str) -> &str {
        let mut u = url;
        loop {
            let before = u.len();
            // Entities first: stripping punctuation first would eat the
            // entity's trailing `;` and leave an unmatchable `&quot` stub.
            for entity in ["&quot;", "&#39;", "&gt;", "&lt;", "&amp;"] {
                u = u.strip_suffix(entity).unwrap_or(u);
            }
            u = u.trim_end_matches(['.', ',', ';', ':', '!', '?', ')']);
            if u.len() == before {
                return u;
            }
        }
    }
}

/// Bare `http://` / `https://` token at the current position.
pub static AUTOLINK_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s]+").unwrap());

/// Bare `local@domain.tld` token at the current position.
pub static AUTOLINK_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

/// `@mention` token, preserved verbatim when `preserve_jira_links` is set.
pub static MENTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@[\w.]+").unwrap());

/// `ISSUE-123` shaped token, preserved verbatim when `preserve_jira_links`
/// is set.
pub static ISSUE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9]+-\d+").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_schemes() {
        assert!(LinkRules::scheme_allowed("https://example.com"));
        assert!(LinkRules::scheme_allowed("http://example.com"));
        assert!(LinkRules::scheme_allowed("mailto:a@b.com"));
        assert!(LinkRules::scheme_allowed("HTTPS://EXAMPLE.COM"));
    }

    #[test]
    fn disallowed_and_missing_schemes() {
        assert!(!LinkRules::scheme_allowed("javascript:alert(1)"));
        assert!(!LinkRules::scheme_allowed("ftp://example.com"));
        assert!(!LinkRules::scheme_allowed("/relative/path"));
        assert!(!LinkRules::scheme_allowed("example.com"));
    }

    #[test]
    fn url_tail_trimming() {
        assert_eq!(
            LinkRules::trim_url_tail("https://example.com/a."),
            "https://example.com/a"
        );
        assert_eq!(
            LinkRules::trim_url_tail("https://example.com/a&quot;"),
            "https://example.com/a"
        );
        assert_eq!(
            LinkRules::trim_url_tail("https://example.com/a?q=1"),
            "https://example.com/a?q=1"
        );
    }

    #[test]
    fn url_tail_mixed_entity_and_punctuation() {
        assert_eq!(
            LinkRules::trim_url_tail("https://example.com/a&gt;."),
            "https://example.com/a"
        );
        assert_eq!(
            LinkRules::trim_url_tail("https://example.com/a.&quot;"),
            "https://example.com/a"
        );
    }

    #[test]
    fn issue_key_shape() {
        assert!(ISSUE_KEY.is_match("PROJ-123 rest"));
        assert!(!ISSUE_KEY.is_match("proj-123"));
        assert!(!ISSUE_KEY.is_match("P-1"));
    }

    #[test]
    fn mention_shape() {
        assert_eq!(MENTION.find("@john.doe!").unwrap().as_str(), "@john.doe");
    }
}
