//! Fetch Tools

mod client;
mod headers;

pub mod types;

pub use types::*;

use crate::error::{FetchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::debug;

/// Anything that can turn a URL into a [`Page`].
///
/// The crawler only talks to this trait, so runs can be driven by
/// in-memory fixtures instead of the network.
#[async_trait]
pub trait Fetcher: Send + Sync {
    fn name(&self) -> &'static str;

    /// One GET, no retry. Non-2xx statuses are errors.
    async fn fetch(&self, url: &str) -> std::result::Result<Page, FetchError>;
}

/// Fetcher backed by a single reusable reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self> {
        Ok(Self {
            client: client::build_client(user_agent)?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    async fn fetch(&self, url: &str) -> std::result::Result<Page, FetchError> {
        let start = Instant::now();

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(url, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::status(url, status.as_u16()));
        }

        let final_url = resp.url().to_string();
        let html = resp
            .text()
            .await
            .map_err(|e| FetchError::transport(url, e.to_string()))?;

        let duration_ms = start.elapsed().as_millis() as u64;
        debug!(url, status = status.as_u16(), bytes = html.len(), duration_ms, "fetched");

        Ok(Page {
            url: url.to_string(),
            final_url,
            status: status.as_u16(),
            duration_ms,
            html,
        })
    }
}
