use reqwest::Client;
use tracing::Instrument;

use crate::registry::{Platform, PlatformConfig, Source};
use crate::telemetry::{self};
use crate::telemetry::ops::badges::Phase as BadgesPhase;

pub mod extractor;
pub mod fetch;

/// Endpoint the platform's extractor expects: stats API or profile page.
pub fn source_url(platform: Platform, cfg: &PlatformConfig) -> Option<String> {
    match platform.source() {
        Source::Api => cfg.api_url(),
        Source::Page => Some(cfg.profile_url.clone()),
    }
}

/// Fetch then extract. Any failure along the way is "no data".
pub async fn scrape(client: &Client, platform: Platform, cfg: &PlatformConfig) -> Option<String> {
    let log = telemetry::badges();
    let Some(url) = source_url(platform, cfg) else {
        log.warn_kv("no api url configured", [("platform", platform.to_string())]);
        return None;
    };

    let fetched = fetch::fetch(client, &url, cfg.timeout)
        .instrument(log.span_kv(&BadgesPhase::Fetch, [("url", url.clone())]))
        .await?;

    let _s = log.span(&BadgesPhase::Extract).entered();
    let msg = extractor::extract(platform, &fetched.body);
    match &msg {
        Some(m) => log.debug_kv("extracted", [("platform", platform.to_string()), ("message", m.clone())]),
        None => log.info_kv("nothing extracted", [("platform", platform.to_string()), ("status", fetched.status.as_u16().to_string())]),
    }
    msg
}
