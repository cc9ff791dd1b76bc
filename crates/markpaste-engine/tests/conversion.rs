use markpaste_engine::{ConversionOptions, ConvertError, Warning, convert};
use pretty_assertions::assert_eq;
use regex::Regex;
use rstest::rstest;

fn convert_default(input: &str) -> markpaste_engine::ConversionResult {
    convert(input, &ConversionOptions::default()).unwrap()
}

#[test]
fn conversion_is_deterministic() {
    let input = "# Title\n\n- a\n- b\n\n> quote with **bold** and https://a.com\n";
    let first = convert_default(input);
    let second = convert_default(input);
    assert_eq!(first.html, second.html);
}

#[test]
fn heading_scenario() {
    let result = convert_default("# Hello");
    assert!(result.html.contains("<h1>Hello</h1>"));
    assert_eq!(result.stats.header_count, 1);
}

#[test]
fn explicit_link_scenario() {
    let result = convert_default("[Google](https://google.com)");
    assert!(
        result
            .html
            .contains("<a href=\"https://google.com\">Google</a>")
    );
    assert_eq!(result.stats.link_count, 1);
}

#[test]
fn javascript_link_is_rejected_with_warning() {
    let result = convert_default("[Bad](javascript:alert(1))");
    assert!(!result.html.contains("<a"));
    assert!(result.html.contains("Bad"));
    assert!(
        result
            .warnings
            .iter()
            .any(|w| matches!(w, Warning::UnsafeUrl { .. }))
    );
}

#[test]
fn mention_preserved_with_jira_option() {
    let opts = ConversionOptions {
        preserve_jira_links: true,
        ..Default::default()
    };
    let result = convert("ping @john.doe", &opts).unwrap();
    assert!(result.html.contains("@john.doe"));
    assert!(!result.html.contains("<a"));
}

#[test]
fn table_scenario() {
    let result = convert_default("| A | B |\n|---|---|\n| 1 | 2 |\n");
    assert_eq!(
        result.html,
        "<table><thead><tr><th>A</th><th>B</th></tr></thead>\
         <tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
    );
}

#[test]
fn code_span_wins_over_bold_markers() {
    let result = convert_default("`**bold**`");
    assert!(result.html.contains("<code>**bold**</code>"));
    assert!(!result.html.contains("<strong>"));
}

#[test]
fn code_and_bold_coexist_in_a_paragraph() {
    let result = convert_default("some **bold** text with `code` span");
    assert!(result.html.contains("<strong>bold</strong>"));
    assert!(result.html.contains("<code>code</code>"));
}

#[test]
fn oversized_input_fails_before_processing() {
    let opts = ConversionOptions {
        max_input_length: 10,
        ..Default::default()
    };
    let err = convert("0123456789ABC", &opts).unwrap_err();
    assert!(matches!(err, ConvertError::InputTooLarge { len: 13, max: 10 }));
}

#[test]
fn indented_lines_become_a_code_block() {
    let result = convert_default("    let a = 1;\n    let b = 2;\n");
    assert_eq!(
        result.html,
        "<pre><code>let a = 1;\nlet b = 2;</code></pre>"
    );
}

#[test]
fn two_space_indent_nests_a_list_item() {
    let result = convert_default("- parent\n  - child\n");
    assert_eq!(
        result.html,
        "<ul><li>parent<ul><li>child</li></ul></li></ul>"
    );
}

#[test]
fn deeply_nested_list_is_capped_not_rejected() {
    let opts = ConversionOptions {
        max_nesting_level: 10,
        ..Default::default()
    };
    let mut input = String::new();
    for depth in 0..20 {
        input.push_str(&"  ".repeat(depth));
        input.push_str("- item\n");
    }
    let result = convert(&input, &opts).unwrap();

    // Maximum <ul> nesting in the output equals the cap plus the top level.
    let mut depth: i32 = 0;
    let mut max_depth = 0;
    for token in result.html.split('<') {
        if token.starts_with("ul>") {
            depth += 1;
            max_depth = max_depth.max(depth);
        } else if token.starts_with("/ul>") {
            depth -= 1;
        }
    }
    assert_eq!(max_depth, 11);
}

#[rstest]
#[case("a < b & c > d")]
#[case("<script>alert(1)</script>")]
#[case("quotes \" and ' here")]
fn escaping_invariant_no_raw_specials_outside_tags(#[case] input: &str) {
    let result = convert_default(input);
    // Strip the tags the engine itself emitted; what remains must be
    // entity-escaped text.
    let tag = Regex::new(r"</?[a-z][a-z0-9]*( [a-z]+=\x22[^\x22]*\x22)*>").unwrap();
    let text_only = tag.replace_all(&result.html, "");
    assert!(!text_only.contains('<'), "raw < in {text_only}");
    assert!(!text_only.contains('>'), "raw > in {text_only}");
    for (i, _) in text_only.match_indices('&') {
        let tail = &text_only[i..];
        assert!(
            ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"]
                .iter()
                .any(|e| tail.starts_with(e)),
            "unescaped & in {text_only}"
        );
    }
}

#[test]
fn whitelist_invariant_holds_when_sanitizing() {
    let input = "# H\n\n**b** *i* ~~s~~ `c`\n\n- l\n\n> q\n\n\
                 | A | B |\n|---|---|\n| 1 | 2 |\n\n[x](https://a.com) http://b.com a@b.co\n";
    let result = convert_default(input);

    let tag_name = Regex::new(r"</?([a-z][a-z0-9]*)").unwrap();
    for cap in tag_name.captures_iter(&result.html) {
        let name = &cap[1];
        assert!(
            markpaste_engine::render::sanitize::ALLOWED_TAGS.contains(&name),
            "tag {name} not in whitelist"
        );
    }

    let href = Regex::new(r#"href="([^"]*)""#).unwrap();
    for cap in href.captures_iter(&result.html) {
        let url = cap[1].to_ascii_lowercase();
        assert!(
            url.starts_with("http://") || url.starts_with("https://") || url.starts_with("mailto:"),
            "href {url} has disallowed scheme"
        );
    }
}

#[test]
fn warnings_accompany_best_effort_output() {
    let result = convert_default("```\nunterminated fence\n\n| A | B |\n|---|---|\n| 1 |\n");
    // The fence swallows the rest of the document, so only the fence
    // warning fires here.
    assert_eq!(result.warnings, vec![Warning::UnterminatedFence]);
    assert!(result.html.contains("<pre><code>"));
}

#[test]
fn ragged_table_degrades_with_warning() {
    let result = convert_default("| A | B |\n|---|---|\n| 1 |\n");
    assert_eq!(result.warnings, vec![Warning::MalformedTable { row: 1 }]);
    assert!(result.html.contains("<td></td>"));
}

#[test]
fn stats_reflect_input_and_output() {
    let result = convert_default("# H\n\n`x` and [l](https://a.com)\n");
    assert_eq!(result.stats.header_count, 1);
    assert_eq!(result.stats.inline_code_count, 1);
    assert_eq!(result.stats.link_count, 1);
    assert!(result.stats.element_count > 0);
    assert_eq!(result.stats.input_length, 32);
    assert_eq!(result.stats.output_length, result.html.len());
    assert!(result.stats.processing_time_ms >= 0.0);
}

#[test]
fn empty_input_produces_empty_html() {
    let result = convert_default("");
    assert_eq!(result.html, "");
    assert!(result.warnings.is_empty());
    assert_eq!(result.stats.element_count, 0);
}

#[test]
fn mixed_document_end_to_end() {
    let input = "\
# Release notes

Changes in **this** release:

- faster `convert()` calls
- fixed nesting
  - even deep ones

> See https://example.com/changelog for details

```rust
let done = true;
```
";
    let result = convert_default(input);
    assert!(result.html.contains("<h1>Release notes</h1>"));
    assert!(result.html.contains("<strong>this</strong>"));
    assert!(result.html.contains("<code>convert()</code>"));
    assert!(result.html.contains("<ul><li>faster"));
    assert!(
        result
            .html
            .contains("<a href=\"https://example.com/changelog\">")
    );
    assert!(
        result
            .html
            .contains("<pre><code class=\"language-rust\">let done = true;</code></pre>")
    );
    assert!(result.warnings.is_empty());
}
