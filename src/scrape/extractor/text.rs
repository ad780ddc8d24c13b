use regex::{Regex, RegexBuilder};
use scraper::Html;
use std::sync::OnceLock;

/// Plain text of a page: every visible text node, trimmed, joined with single spaces.
pub fn flatten_html(html: &str) -> String {
    let doc = Html::parse_document(html);
    let mut parts: Vec<&str> = Vec::new();
    for node in doc.root_element().descendants() {
        let Some(text) = node.value().as_text() else { continue };
        let hidden = node
            .parent()
            .and_then(|p| p.value().as_element().map(|e| matches!(e.name(), "script" | "style" | "noscript")))
            .unwrap_or(false);
        if hidden { continue; }
        let t = text.trim();
        if !t.is_empty() { parts.push(t); }
    }
    collapse_whitespace(&parts.join(" "))
}

fn collapse_whitespace(s: &str) -> String {
    let mut buf = String::with_capacity(s.len());
    let mut in_ws = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_ws {
                if !buf.is_empty() { buf.push(' '); }
                in_ws = true;
            }
        } else {
            buf.push(ch);
            in_ws = false;
        }
    }
    buf.trim().to_string()
}

/// Case-insensitive pattern, compiled on first use.
pub fn pattern(cell: &'static OnceLock<Option<Regex>>, src: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| RegexBuilder::new(src).case_insensitive(true).build().ok()).as_ref()
}

/// First capture group of `re` in `text`.
pub fn capture<'t>(re: Option<&Regex>, text: &'t str) -> Option<&'t str> {
    let caps = re?.captures(text)?;
    caps.get(1).map(|m| m.as_str())
}

/// "1,234" -> 1234
pub fn parse_count(s: &str) -> Option<u64> {
    s.replace(',', "").trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    static NUM: OnceLock<Option<Regex>> = OnceLock::new();

    #[test]
    fn flatten_joins_text_nodes() {
        let html = r#"
        <html><head><style>.x { color: red }</style><script>var n = 1;</script></head>
        <body><div><span>Problems</span>   <b>Solved:</b>
          <i>1,234</i></div><p>  trailing   text </p></body></html>
        "#;
        assert_eq!(flatten_html(html), "Problems Solved: 1,234 trailing text");
    }

    #[test]
    fn flatten_empty_page() {
        assert_eq!(flatten_html(""), "");
    }

    #[test]
    fn capture_is_case_insensitive() {
        let re = pattern(&NUM, r"count\s*:\s*([0-9,]+)");
        assert_eq!(capture(re, "COUNT: 12,000 more"), Some("12,000"));
        assert_eq!(capture(re, "nothing here"), None);
    }

    #[test]
    fn parse_count_strips_separators() {
        assert_eq!(parse_count("1,234"), Some(1234));
        assert_eq!(parse_count(" 42 "), Some(42));
        assert_eq!(parse_count("n/a"), None);
    }
}
