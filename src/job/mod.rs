use anyhow::Result;
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::path::Path;
use tracing::Instrument;

use crate::badge::{self, BadgeDocument, Provenance};
use crate::config::RunConfig;
use crate::registry::{Platform, PlatformConfig};
use crate::scrape;
use crate::telemetry::{self};
use crate::telemetry::ops::badges::Phase as BadgesPhase;

pub mod types;

use types::{JobReport, RunReport};

/// Run every selected platform job in registry order, then stamp the run marker.
pub async fn run(cfg: &RunConfig, now: DateTime<Utc>) -> Result<RunReport> {
    run_with(cfg, now, |p| p.config()).await
}

pub async fn run_with<F>(cfg: &RunConfig, now: DateTime<Utc>, sources: F) -> Result<RunReport>
where
    F: Fn(Platform) -> PlatformConfig,
{
    let log = telemetry::badges();
    let span = log.root_span_kv([
        ("out_dir", cfg.out_dir.display().to_string()),
        ("platforms", cfg.platforms.iter().map(|p| p.slug()).collect::<Vec<_>>().join(",")),
    ]);
    run_all(cfg, now, sources).instrument(span).await
}

async fn run_all<F>(cfg: &RunConfig, now: DateTime<Utc>, sources: F) -> Result<RunReport>
where
    F: Fn(Platform) -> PlatformConfig,
{
    let log = telemetry::badges();
    let client = scrape::fetch::build_client()?;

    let mut jobs = Vec::with_capacity(cfg.platforms.len());
    for platform in &cfg.platforms {
        let report = run_job(&client, *platform, &sources(*platform), &cfg.out_dir).await;
        jobs.push(report);
    }

    let marker_written = {
        let _s = log.span(&BadgesPhase::Marker).entered();
        match badge::write_run_marker(&cfg.out_dir, now) {
            Ok(path) => { log.info_kv("🕒 run marker", [("path", path.display().to_string())]); true }
            Err(e) => { log.error_kv("run marker not written", [("error", format!("{:#}", e))]); false }
        }
    };

    let report = RunReport { jobs, marker_written, last_run: now.timestamp() };
    log.totals(
        report.count(Provenance::Fresh),
        report.count(Provenance::Prior),
        report.count(Provenance::Placeholder),
        report.failed(),
    );
    Ok(report)
}

/// One isolated fetch -> extract -> fallback -> write job. Never fails.
pub async fn run_job(client: &Client, platform: Platform, cfg: &PlatformConfig, out_dir: &Path) -> JobReport {
    let log = telemetry::badges();
    let span = log.span_kv(&BadgesPhase::Job, [("platform", platform.to_string()), ("handle", cfg.handle.clone())]);
    job_body(client, platform, cfg, out_dir).instrument(span).await
}

async fn job_body(client: &Client, platform: Platform, cfg: &PlatformConfig, out_dir: &Path) -> JobReport {
    let log = telemetry::badges();
    let path = out_dir.join(platform.badge_file());

    let fresh = scrape::scrape(client, platform, cfg).await;

    let (message, provenance) = {
        let _s = log.span(&BadgesPhase::Fallback).entered();
        // prior file is only consulted when fresh extraction came up empty
        let prior = if fresh.is_some() { None } else { badge::load_existing_message(&path) };
        badge::resolve(fresh, prior)
    };
    if provenance != Provenance::Fresh {
        log.warn_kv("using fallback message", [("platform", platform.to_string()), ("message", message.clone())]);
    }

    let written = {
        let _s = log.span_kv(&BadgesPhase::Write, [("path", path.display().to_string())]).entered();
        let doc = BadgeDocument::new(&platform.style(), message.clone());
        match badge::write_badge(&path, &doc) {
            Ok(()) => true,
            Err(e) => { log.error_kv("badge not written", [("platform", platform.to_string()), ("error", format!("{:#}", e))]); false }
        }
    };

    log.job_summary(platform, provenance, &message, written);
    JobReport { platform, message, provenance, written, path: path.display().to_string() }
}
