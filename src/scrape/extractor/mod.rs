mod codechef;
mod hackerearth;
mod hackerrank;
mod leetcode;
mod spoj;
pub mod text;

use crate::registry::Platform;

/// Per-platform extraction over a fetched body. `None` means "no data".
pub fn extract(platform: Platform, body: &str) -> Option<String> {
    let msg = match platform {
        Platform::HackerRank => hackerrank::extract(body),
        Platform::HackerEarth => hackerearth::extract(body),
        Platform::Spoj => spoj::extract(body),
        Platform::LeetCode => leetcode::extract(body),
        Platform::CodeChef => codechef::extract(body),
    };
    msg.filter(|m| !m.trim().is_empty())
}
