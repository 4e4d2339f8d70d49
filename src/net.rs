// src/net.rs
// Blocking HTTP client. One URL at a time, so no async runtime; the timeout
// is explicit rather than whatever the transport defaults to.

use std::time::Duration;

use crate::error::FetchError;
use crate::params::USER_AGENT;

pub struct Client {
    http: reqwest::blocking::Client,
}

impl Client {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    /// GET one page and return the body as text.
    /// Non-2xx status or a transport failure is a `FetchError`; no retries.
    pub fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .http
            .get(url)
            .send()
            .map_err(|source| FetchError::Network { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }

        resp.text()
            .map_err(|source| FetchError::Network { url: s!(url), source })
    }
}
