use regex::Regex;
use std::sync::OnceLock;

use super::text::{capture, flatten_html, pattern};

static SOLVED: OnceLock<Option<Regex>> = OnceLock::new();
static FOLLOWERS: OnceLock<Option<Regex>> = OnceLock::new();

pub fn extract(html: &str) -> Option<String> {
    let txt = flatten_html(html);

    // 1) Preferred: "Problems Solved: N"
    if let Some(n) = capture(pattern(&SOLVED, r"Problems?\s*Solved\s*:?\s*([0-9][0-9,]*)"), &txt) {
        return Some(format!("Solved {}", n));
    }

    // 2) Fallback: "Followers: N"
    capture(pattern(&FOLLOWERS, r"Followers\s*:?\s*([0-9][0-9,]*)"), &txt).map(|n| format!("Followers {}", n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problems_solved_keeps_separators() {
        let html = r#"<html><body><div class="stats"><span>Problems Solved:</span> <span>1,234</span></div></body></html>"#;
        assert_eq!(extract(html).as_deref(), Some("Solved 1,234"));
    }

    #[test]
    fn singular_label_without_colon() {
        let html = "<html><body><p>problem solved 7</p></body></html>";
        assert_eq!(extract(html).as_deref(), Some("Solved 7"));
    }

    #[test]
    fn falls_back_to_followers() {
        let html = "<html><body><p>Followers: 58</p><p>Following: 3</p></body></html>";
        assert_eq!(extract(html).as_deref(), Some("Followers 58"));
    }

    #[test]
    fn none_when_missing() {
        let html = "<html><head><title>HackerEarth</title></head><body><p>Sign in</p></body></html>";
        assert!(extract(html).is_none());
    }
}
