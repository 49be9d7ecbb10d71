//! Content fetching from URLs, files, and stdin.
//!
//! This module provides functions for retrieving HTML content from various
//! sources: HTTP/HTTPS URLs (behind the `fetch` feature), local files, and
//! standard input. Fetch failures are reported, never retried; the caller
//! decides whether the run continues.

use std::fs;
use std::path::PathBuf;

use crate::{DocsiftError, Result};

/// HTTP client configuration for fetching documentation pages.
///
/// Controls the bounded request timeout and the client identity header.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string. Defaults to a browser-like identity;
    /// documentation sites serve stripped-down markup to obvious bots.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
        }
    }
}

/// Fetches HTML content from a URL.
///
/// Performs an HTTP GET, follows redirects, and returns the response body
/// as text. Non-2xx statuses and network failures surface as
/// [`DocsiftError::HttpError`]; exceeding the timeout surfaces as
/// [`DocsiftError::Timeout`].
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    use std::time::Duration;

    let parsed_url = url::Url::parse(url).map_err(|e| DocsiftError::InvalidUrl(e.to_string()))?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(DocsiftError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                DocsiftError::Timeout { timeout: config.timeout }
            } else {
                DocsiftError::HttpError(e)
            }
        })?;

    let response = response.error_for_status()?;
    let content = response.text().await?;

    Ok(content)
}

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(DocsiftError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(DocsiftError::from)
    }
}

/// Reads HTML content from standard input until EOF.
///
/// Useful for piping content from other commands.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(DocsiftError::from)?;

    Ok(buffer)
}
