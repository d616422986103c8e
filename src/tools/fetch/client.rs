use super::headers::default_headers;
use crate::error::{QrawlError, Result};
use reqwest::{redirect, Client};
use std::time::Duration;

const REDIRECT_LIMIT: usize = 10;
const POOL_IDLE_TIMEOUT_SEC: u64 = 90;

/// Build the shared reqwest client. No request timeout is set; the client default applies.
pub(crate) fn build_client(user_agent: &str) -> Result<Client> {
    Client::builder()
        .default_headers(default_headers(user_agent))
        .cookie_store(true)
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SEC))
        .build()
        .map_err(|e| QrawlError::Config(format!("failed to build client: {e}")))
}
