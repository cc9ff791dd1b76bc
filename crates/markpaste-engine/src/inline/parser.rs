//! Single-pass inline parsing with fixed precedence.
//!
//! Rules are tried in order at each position: code span, strong, light
//! emphasis, strikethrough, mention/issue-key preservation, explicit link,
//! autolink URL, autolink email. A rule that matches consumes its span, so
//! later rules never see text an earlier rule already claimed.

use crate::error::Warning;
use crate::options::ConversionOptions;

use super::cursor::Cursor;
use super::kinds::link::{AUTOLINK_EMAIL, AUTOLINK_URL, ISSUE_KEY, MENTION};
use super::kinds::{CodeSpan, Emphasis, LinkRules};
use super::types::InlineNode;

pub struct InlineParser<'a> {
    opts: &'a ConversionOptions,
    warnings: &'a mut Vec<Warning>,
}

impl<'a> InlineParser<'a> {
    pub fn new(opts: &'a ConversionOptions, warnings: &'a mut Vec<Warning>) -> Self {
        Self { opts, warnings }
    }

    /// Parses leaf-block text into inline nodes.
    pub fn parse(&mut self, s: &str) -> Vec<InlineNode> {
        self.parse_with(s, true)
    }

    /// `allow_links` is cleared when recursing into link text, so a URL
    /// inside an anchor's label can never produce a nested anchor.
    fn parse_with(&mut self, s: &str, allow_links: bool) -> Vec<InlineNode> {
        let mut cur = Cursor::new(s);
        let mut out: Vec<InlineNode> = Vec::new();
        let mut text = String::new();

        fn flush(out: &mut Vec<InlineNode>, text: &mut String) {
            if !text.is_empty() {
                out.push(InlineNode::Text(std::mem::take(text)));
            }
        }

        while !cur.eof() {
            if let Some(node) = self.try_code_span(&mut cur) {
                flush(&mut out, &mut text);
                out.push(node);
                continue;
            }
            if let Some(node) = self.try_strong(&mut cur, allow_links) {
                flush(&mut out, &mut text);
                out.push(node);
                continue;
            }
            if let Some(node) = self.try_emph(&mut cur, allow_links) {
                flush(&mut out, &mut text);
                out.push(node);
                continue;
            }
            if let Some(node) = self.try_strike(&mut cur, allow_links) {
                flush(&mut out, &mut text);
                out.push(node);
                continue;
            }
            if self.opts.preserve_jira_links
                && let Some(token) = try_jira_token(&mut cur)
            {
                text.push_str(token);
                continue;
            }
            if allow_links {
                if let Some(node) = self.try_link(&mut cur) {
                    flush(&mut out, &mut text);
                    out.push(node);
                    continue;
                }
                if let Some(node) = try_autolink_url(&mut cur) {
                    flush(&mut out, &mut text);
                    out.push(node);
                    continue;
                }
                if let Some(node) = try_autolink_email(&mut cur) {
                    flush(&mut out, &mut text);
                    out.push(node);
                    continue;
                }
            }

            let start = cur.i;
            cur.bump_char();
            text.push_str(&cur.s[start..cur.i]);
        }

        flush(&mut out, &mut text);
        out
    }

    /// Code span: raw zone, wins over everything.
    fn try_code_span(&mut self, cur: &mut Cursor<'_>) -> Option<InlineNode> {
        if cur.peek() != Some(CodeSpan::TICK) {
            return None;
        }
        let rest = cur.rest();
        let close = rest[1..].find(CodeSpan::TICK as char)?;
        let inner = &rest[1..1 + close];
        cur.bump_n(close + 2);
        Some(InlineNode::Code(inner.to_string()))
    }

    fn try_strong(&mut self, cur: &mut Cursor<'_>, allow_links: bool) -> Option<InlineNode> {
        for delim in Emphasis::STRONG {
            if !cur.starts_with(delim) {
                continue;
            }
            let rest = cur.rest();
            let delim_str = std::str::from_utf8(delim).unwrap_or_default();
            if let Some(close) = rest[2..].find(delim_str) {
                let inner = &rest[2..2 + close];
                if !inner.trim().is_empty() {
                    cur.bump_n(close + 4);
                    let children = self.parse_with(inner, allow_links);
                    return Some(InlineNode::Strong(children));
                }
            }
        }
        None
    }

    fn try_emph(&mut self, cur: &mut Cursor<'_>, allow_links: bool) -> Option<InlineNode> {
        let b = cur.peek()?;
        if !Emphasis::LIGHT.contains(&b) {
            return None;
        }
        let rest = cur.rest();
        let close = rest[1..].find(b as char)?;
        let inner = &rest[1..1 + close];
        if inner.trim().is_empty() {
            return None;
        }
        cur.bump_n(close + 2);
        let children = self.parse_with(inner, allow_links);
        Some(InlineNode::Emph(children))
    }

    fn try_strike(&mut self, cur: &mut Cursor<'_>, allow_links: bool) -> Option<InlineNode> {
        if !cur.starts_with(Emphasis::STRIKE) {
            return None;
        }
        let rest = cur.rest();
        let close = rest[2..].find("~~")?;
        let inner = &rest[2..2 + close];
        if inner.trim().is_empty() {
            return None;
        }
        cur.bump_n(close + 4);
        let children = self.parse_with(inner, allow_links);
        Some(InlineNode::Strike(children))
    }

    /// Explicit `[text](url)` link. A disallowed or missing scheme demotes
    /// the whole match to literal text and records a warning.
    fn try_link(&mut self, cur: &mut Cursor<'_>) -> Option<InlineNode> {
        if cur.peek() != Some(LinkRules::OPEN) {
            return None;
        }
        let rest = cur.rest();
        let mid = rest.find(LinkRules::MID)?;
        let url_start = mid + LinkRules::MID.len();
        let close = rest[url_start..].find(LinkRules::CLOSE as char)?;

        let label = &rest[1..mid];
        let url = rest[url_start..url_start + close].trim();
        let full_len = url_start + close + 1;

        if LinkRules::scheme_allowed(url) {
            cur.bump_n(full_len);
            let children = self.parse_with(label, false);
            Some(InlineNode::Link {
                href: url.to_string(),
                children,
            })
        } else {
            self.warnings.push(Warning::UnsafeUrl {
                url: url.to_string(),
            });
            let literal = rest[..full_len].to_string();
            cur.bump_n(full_len);
            Some(InlineNode::Text(literal))
        }
    }
}

/// Consumes an `@mention` or `ISSUE-123` token, returning it as literal
/// text. Runs before any link rule so these tokens are never linkified.
fn try_jira_token<'s>(cur: &mut Cursor<'s>) -> Option<&'s str> {
    if !cur.at_token_start() {
        return None;
    }
    let rest = cur.rest();
    let m = match cur.peek()? {
        b'@' => MENTION.find(rest)?,
        b'A'..=b'Z' => ISSUE_KEY.find(rest)?,
        _ => return None,
    };
    cur.bump_n(m.end());
    Some(m.as_str())
}

fn try_autolink_url(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(b'h') || !cur.at_token_start() {
        return None;
    }
    let m = AUTOLINK_URL.find(cur.rest())?;
    let url = LinkRules::trim_url_tail(m.as_str());
    if url.is_empty() {
        return None;
    }
    cur.bump_n(url.len());
    Some(InlineNode::Autolink {
        href: url.to_string(),
        label: url.to_string(),
    })
}

fn try_autolink_email(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let b = cur.peek()?;
    if !b.is_ascii_alphanumeric() || !cur.at_token_start() {
        return None;
    }
    let m = AUTOLINK_EMAIL.find(cur.rest())?;
    cur.bump_n(m.end());
    Some(InlineNode::Autolink {
        href: format!("mailto:{}", m.as_str()),
        label: m.as_str().to_string(),
    })
}
