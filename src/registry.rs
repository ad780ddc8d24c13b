use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Platforms in run order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    HackerRank,
    HackerEarth,
    Spoj,
    LeetCode,
    CodeChef,
}

pub const ALL: [Platform; 5] = [
    Platform::HackerRank,
    Platform::HackerEarth,
    Platform::Spoj,
    Platform::LeetCode,
    Platform::CodeChef,
];

/// Where the extractor reads from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Source { Page, Api }

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformConfig {
    pub handle: String,
    pub profile_url: String,
    pub api_url_template: Option<String>,
    pub timeout: Duration,
}

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

impl PlatformConfig {
    pub fn new(handle: &str, profile_url: &str, api_url_template: Option<&str>) -> Self {
        PlatformConfig {
            handle: handle.to_string(),
            profile_url: profile_url.to_string(),
            api_url_template: api_url_template.map(str::to_string),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_url(&self) -> Option<String> {
        self.api_url_template.as_ref().map(|t| t.replace("{handle}", &self.handle))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BadgeStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub icon: Option<&'static str>,
}

impl Platform {
    pub fn slug(&self) -> &'static str {
        match self {
            Platform::HackerRank => "hackerrank",
            Platform::HackerEarth => "hackerearth",
            Platform::Spoj => "spoj",
            Platform::LeetCode => "leetcode",
            Platform::CodeChef => "codechef",
        }
    }

    pub fn badge_file(&self) -> String { format!("{}.json", self.slug()) }

    pub fn source(&self) -> Source {
        match self {
            Platform::HackerRank | Platform::LeetCode => Source::Api,
            Platform::HackerEarth | Platform::Spoj | Platform::CodeChef => Source::Page,
        }
    }

    pub fn timeout(&self) -> Duration {
        match self {
            Platform::HackerRank | Platform::HackerEarth | Platform::Spoj => Duration::from_secs(20),
            Platform::LeetCode | Platform::CodeChef => Duration::from_secs(25),
        }
    }

    pub fn style(&self) -> BadgeStyle {
        match self {
            Platform::HackerRank => BadgeStyle { label: "HackerRank", color: "2EC866", icon: Some("hackerrank") },
            Platform::HackerEarth => BadgeStyle { label: "HackerEarth", color: "323754", icon: Some("hackerearth") },
            Platform::Spoj => BadgeStyle { label: "SPOJ", color: "0A0A0A", icon: Some("spoj") },
            Platform::LeetCode => BadgeStyle { label: "LeetCode", color: "FFA116", icon: Some("leetcode") },
            Platform::CodeChef => BadgeStyle { label: "CodeChef", color: "326f9f", icon: Some("codechef") },
        }
    }

    /// Compiled-in profile configuration.
    pub fn config(&self) -> PlatformConfig {
        let cfg = match self {
            Platform::HackerRank => PlatformConfig::new(
                "amananandrai",
                "https://www.hackerrank.com/profile/amananandrai",
                Some("https://www.hackerrank.com/rest/hackers/{handle}/profile"),
            ),
            Platform::HackerEarth => PlatformConfig::new("amananandrai", "https://www.hackerearth.com/@amananandrai/", None),
            Platform::Spoj => PlatformConfig::new("amananandrai", "https://www.spoj.com/users/amananandrai/", None),
            Platform::LeetCode => PlatformConfig::new(
                "aman_rai",
                "https://leetcode.com/u/aman_rai/",
                Some("https://leetcode-stats-api.herokuapp.com/{handle}"),
            ),
            Platform::CodeChef => PlatformConfig::new("sangadak", "https://www.codechef.com/users/sangadak", None),
        };
        cfg.with_timeout(self.timeout())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.slug()) }
}
