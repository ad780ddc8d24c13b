use anyhow::{anyhow, Context, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::telemetry::{self};

// some profile pages block non-browser agents
pub const USER_AGENT: &str = "Mozilla/5.0";

#[derive(Debug, Clone)]
pub struct Fetched {
    pub status: StatusCode,
    pub body: String,
}

pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("failed to build reqwest client")
}

/// Single GET with a timeout. Every failure is logged and collapsed to `None`.
pub async fn fetch(client: &Client, url: &str, timeout: Duration) -> Option<Fetched> {
    match try_fetch(client, url, timeout).await {
        Ok(f) => Some(f),
        Err(e) => {
            telemetry::badges().warn_kv("fetch failed", [("url", url.to_string()), ("reason", format!("{:#}", e))]);
            None
        }
    }
}

async fn try_fetch(client: &Client, url: &str, timeout: Duration) -> Result<Fetched> {
    let response = client.get(url).timeout(timeout).send().await.context("request failed")?;
    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!("upstream returned status {}", status));
    }
    let body = response.text().await.context("failed to read response body")?;
    Ok(Fetched { status, body })
}

/// Local upstream that accepts connections and never answers.
#[cfg(test)]
pub(crate) async fn silent_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((conn, _)) = listener.accept().await {
            held.push(conn);
        }
    });
    format!("http://{}", addr)
}
