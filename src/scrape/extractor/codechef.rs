use regex::Regex;
use std::sync::OnceLock;

use super::text::{capture, flatten_html, pattern};

static RATING: OnceLock<Option<Regex>> = OnceLock::new();
static STARS: OnceLock<Option<Regex>> = OnceLock::new();

pub fn extract(html: &str) -> Option<String> {
    let txt = flatten_html(html);
    let rating = capture(pattern(&RATING, r"Rating\s*:\s*([0-9][0-9,]*)"), &txt);
    let stars = capture(pattern(&STARS, r"(\d)\s*Star"), &txt);

    match (rating, stars) {
        (Some(r), Some(s)) => Some(format!("{} • {}★", r, s)),
        (Some(r), None) => Some(r.to_string()),
        (None, Some(s)) => Some(format!("{}★", s)),
        (None, None) => None,
    }
}
