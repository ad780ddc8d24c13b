use regex::Regex;
use std::sync::OnceLock;

use super::text::{capture, flatten_html, parse_count, pattern};

static SOLVED: OnceLock<Option<Regex>> = OnceLock::new();
static RANK: OnceLock<Option<Regex>> = OnceLock::new();

pub fn extract(html: &str) -> Option<String> {
    let txt = flatten_html(html);
    let solved = capture(pattern(&SOLVED, r"Problems\s*solved\s*:\s*([0-9][0-9,]*)"), &txt)
        .and_then(parse_count)
        .filter(|n| *n > 0);
    let rank = capture(pattern(&RANK, r"World\s*Rank\s*:\s*#?\s*([0-9][0-9,]*)"), &txt);

    match (solved, rank) {
        (Some(n), Some(r)) => Some(format!("Solved {} • Rank {}", n, r)),
        (Some(n), None) => Some(format!("Solved {}", n)),
        // rank alone is not worth a badge
        (None, _) => None,
    }
}
