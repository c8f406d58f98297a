//! Page acquisition — HTTP GET or local file/stdin.
//!
//! Not a browser and not a crawler: one GET per run, no retries, no
//! redirects beyond reqwest's defaults. Local input exists so a saved page
//! (or a pipe) can be ranked without touching the network.

use std::io::Read;
use std::time::Duration;

use anyhow::{Context, Result};

/// Descriptive client identifier sent with every fetch.
const USER_AGENT: &str = concat!(
    "skillrank/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/skillrank/skillrank)"
);

/// Fetch a page over HTTP and return its body as text.
///
/// The body is decoded with the charset declared in the `Content-Type`
/// response header, falling back to UTF-8; undecodable bytes become
/// replacement characters rather than an error. Timeouts and transport
/// failures propagate to the caller.
pub async fn fetch_text(url: &str, timeout_secs: u64) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .context("failed to build HTTP client")?;

    tracing::debug!("GET {url} (timeout {timeout_secs}s)");
    let response = client
        .get(url)
        .header("Accept", "text/html,*/*")
        .send()
        .await
        .with_context(|| format!("GET {url} failed"))?;

    tracing::debug!("{url} responded {}", response.status());
    let response = response
        .error_for_status()
        .with_context(|| format!("GET {url} returned an error status"))?;

    response
        .text()
        .await
        .with_context(|| format!("failed to read body of {url}"))
}

/// Read a page from a local file, or from stdin when `path` is `-`.
///
/// Bytes that are not valid UTF-8 are replaced, never a hard failure.
pub fn read_local(path: &str) -> Result<String> {
    let bytes = if path == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read(path).with_context(|| format!("failed to read {path}"))?
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
