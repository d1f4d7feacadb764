//! HTML escaping and input sanitization.
//!
//! Snip text is always escaped as plain text when rendered. Wrapper and
//! attribute options are stripped of markup entirely, while prefix/suffix
//! markup keeps a constrained subset of inline and structural tags.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Tags that survive [`sanitize_rich_text`]. Attributes never do.
static ALLOWED_TAGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "abbr", "b", "blockquote", "br", "code", "div", "em", "h1", "h2", "h3", "h4", "h5",
        "h6", "hr", "i", "li", "ol", "p", "pre", "s", "small", "span", "strong", "sub", "sup",
        "u", "ul",
    ]
    .into_iter()
    .collect()
});

/// Escapes a string for use as HTML text content.
pub fn escape_html_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escapes a string for use inside a double-quoted HTML attribute value.
pub fn escape_html_attr(input: &str) -> String {
    escape_html_text(input)
}

/// Strips anything tag-like and collapses whitespace runs to single spaces.
pub fn sanitize_plain_text(input: &str) -> String {
    let mut text = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            _ => text.push(ch),
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Filters markup down to the allow-listed tags.
///
/// Text outside tags passes through unchanged. Allowed tags are re-emitted
/// with their attributes dropped, disallowed tags are removed, and a `<`
/// that never closes is escaped.
pub fn sanitize_rich_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];

        let Some(close) = tail.find('>') else {
            out.push_str("&lt;");
            rest = tail;
            continue;
        };

        let token = &tail[..close];
        let (closing, name_part) = match token.strip_prefix('/') {
            Some(stripped) => (true, stripped),
            None => (false, token),
        };
        let name = name_part
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        if !name.is_empty() && ALLOWED_TAGS.contains(name.as_str()) {
            out.push('<');
            if closing {
                out.push('/');
            }
            out.push_str(&name);
            out.push('>');
        }

        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    out
}
