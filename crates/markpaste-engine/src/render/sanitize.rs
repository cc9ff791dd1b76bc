//! Whitelist filtering of the assembled HTML.
//!
//! Runs after assembly as a second line of defense, independent of the
//! scheme validation the inline parser already performed. Only tags in
//! [`ALLOWED_TAGS`] survive; a stripped tag keeps its text content. `<a>`
//! keeps `href` and `title` only, with the href scheme re-validated on the
//! entity-decoded value; `<code>` keeps its `language-*` class.

use regex::Regex;
use std::sync::LazyLock;

use crate::inline::LinkRules;

pub const ALLOWED_TAGS: [&str; 24] = [
    "p",
    "br",
    "strong",
    "em",
    "del",
    "code",
    "pre",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "ul",
    "ol",
    "li",
    "a",
    "blockquote",
    "table",
    "thead",
    "tbody",
    "tr",
    "td",
    "th",
];

static HREF_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)href\s*=\s*"([^"]*)""#).unwrap());
static TITLE_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)title\s*=\s*"([^"]*)""#).unwrap());
static LANGUAGE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)class\s*=\s*"(language-[A-Za-z0-9_+#.-]*)""#).unwrap());

/// Filters `html` through the tag whitelist.
pub fn sanitize(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        let after = &rest[lt + 1..];
        match after.find('>') {
            Some(gt) => {
                if let Some(tag) = rebuild_tag(&after[..gt]) {
                    out.push_str(&tag);
                }
                rest = &after[gt + 1..];
            }
            None => {
                // A dangling `<` with no close; keep the tail as text.
                out.push_str(&rest[lt..]);
                rest = "";
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Rebuilds a tag from its inner body (`strong`, `/p`, `a href="..."`),
/// returning `None` when the tag is not whitelisted. Rebuilding rather
/// than passing through guarantees no attribute survives except the ones
/// explicitly retained.
fn rebuild_tag(body: &str) -> Option<String> {
    let closing = body.starts_with('/');
    let name_part = body.trim_start_matches('/');
    let name: String = name_part
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();

    if !ALLOWED_TAGS.contains(&name.as_str()) {
        return None;
    }
    if closing {
        return Some(format!("</{name}>"));
    }

    match name.as_str() {
        "a" => {
            let mut tag = String::from("<a");
            if let Some(c) = HREF_ATTR.captures(body) {
                let href = &c[1];
                let decoded = html_escape::decode_html_entities(href);
                if LinkRules::scheme_allowed(&decoded) {
                    tag.push_str(&format!(" href=\"{href}\""));
                }
            }
            if let Some(c) = TITLE_ATTR.captures(body) {
                tag.push_str(&format!(" title=\"{}\"", &c[1]));
            }
            tag.push('>');
            Some(tag)
        }
        "code" => match LANGUAGE_CLASS.captures(body) {
            Some(c) => Some(format!("<code class=\"{}\">", &c[1])),
            None => Some("<code>".to_string()),
        },
        _ => Some(format!("<{name}>")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn allowed_tags_pass_through() {
        let html = "<p><strong>hi</strong> <em>there</em></p>";
        assert_eq!(sanitize(html), html);
    }

    #[test]
    fn disallowed_tag_is_stripped_text_kept() {
        assert_eq!(sanitize("<script>alert(1)</script>"), "alert(1)");
        assert_eq!(sanitize("<p><span>x</span></p>"), "<p>x</p>");
    }

    #[test]
    fn anchor_keeps_href_and_title_only() {
        assert_eq!(
            sanitize(r#"<a href="https://a.com" title="t" onclick="evil()">x</a>"#),
            r#"<a href="https://a.com" title="t">x</a>"#
        );
    }

    #[test]
    fn anchor_with_bad_scheme_loses_href() {
        assert_eq!(
            sanitize(r#"<a href="javascript:alert(1)">x</a>"#),
            "<a>x</a>"
        );
    }

    #[test]
    fn entity_masked_scheme_is_caught() {
        // Scheme re-validation happens on the decoded value.
        assert_eq!(
            sanitize(r#"<a href="javascript&#58;alert(1)">x</a>"#),
            "<a>x</a>"
        );
    }

    #[test]
    fn non_anchor_attributes_are_dropped() {
        assert_eq!(sanitize(r#"<p style="color:red">x</p>"#), "<p>x</p>");
        assert_eq!(sanitize(r#"<td align="right">2</td>"#), "<td>2</td>");
    }

    #[test]
    fn language_class_on_code_survives() {
        assert_eq!(
            sanitize(r#"<pre><code class="language-rust">x</code></pre>"#),
            r#"<pre><code class="language-rust">x</code></pre>"#
        );
        assert_eq!(
            sanitize(r#"<code class="not-a-language">x</code>"#),
            "<code>x</code>"
        );
    }

    #[test]
    fn dangling_angle_is_kept_as_text() {
        assert_eq!(sanitize("a < b"), "a < b");
    }
}
