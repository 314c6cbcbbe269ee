//! GET-only transport with the upstream retry policy.
//!
//! [`Transport`] is the seam between resolvers and the network. The default
//! implementation, [`HttpTransport`], wraps a pooled `reqwest` blocking client.
//! Tests substitute an in-memory implementation.

use std::thread;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, RETRY_AFTER, USER_AGENT};
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{ApiHost, ApiUrls, ClientConfig, Identification, RetryPolicy};
use crate::error::{Error, Result};

const CLIENT_HEADER: &str = "x-super-client";
const CONTACT_HEADER: &str = "x-super-contact";

/// Issues GET requests and returns the decoded JSON body.
///
/// An empty body is reported as [`Value::Null`].
pub trait Transport: Send + Sync {
    fn get(&self, host: ApiHost, segments: &[&str]) -> Result<Value>;
}

/// `reqwest`-backed transport. One instance holds one connection pool for the
/// lifetime of the owning context.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    urls: ApiUrls,
    retry: RetryPolicy,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(identification_headers(&config.identification)?)
            .build()
            .map_err(Error::Http)?;

        // Validate both bases eagerly so misconfiguration surfaces at startup.
        for host in [ApiHost::Diveharder, ApiHost::Community] {
            build_url(&config.urls, host, &[])?;
        }

        Ok(Self {
            client,
            urls: config.urls.clone(),
            retry: config.retry.clone(),
        })
    }

    /// Send a GET, retrying per policy. Returns the response and the number
    /// of attempts it took.
    fn send_with_retry(&self, url: &Url) -> Result<(Response, u32)> {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            debug!(url = %url, attempt, "GET");

            match self.client.get(url.clone()).send() {
                Ok(response) => {
                    let status = response.status();
                    if !self.retry.retries_status(status.as_u16()) {
                        return Ok((response, attempt));
                    }
                    if attempt > self.retry.max_retries {
                        return Err(Error::Transport {
                            url: url.to_string(),
                            attempts: attempt,
                            reason: format!("retries exhausted, last status {}", status),
                        });
                    }
                    let delay = retry_after(&response)
                        .map(|delay| self.retry.clamp(delay))
                        .unwrap_or_else(|| self.retry.backoff(attempt));
                    warn!(
                        url = %url,
                        status = status.as_u16(),
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "retrying request"
                    );
                    thread::sleep(delay);
                }
                Err(err) if is_transient(&err) && attempt <= self.retry.max_retries => {
                    let delay = self.retry.backoff(attempt);
                    warn!(
                        url = %url,
                        attempt,
                        error = %err,
                        delay_ms = delay.as_millis() as u64,
                        "retrying request after connection failure"
                    );
                    thread::sleep(delay);
                }
                Err(err) => {
                    return Err(Error::Transport {
                        url: url.to_string(),
                        attempts: attempt,
                        reason: err.to_string(),
                    });
                }
            }
        }
    }
}

impl Transport for HttpTransport {
    fn get(&self, host: ApiHost, segments: &[&str]) -> Result<Value> {
        let url = build_url(&self.urls, host, segments)?;
        let (response, attempts) = self.send_with_retry(&url)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|err| Error::Transport {
            url: url.to_string(),
            attempts,
            reason: format!("failed to read response body: {err}"),
        })?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body)
            .map_err(|err| Error::decode("response", url.to_string(), err.to_string()))
    }
}

fn identification_headers(identification: &Identification) -> Result<HeaderMap> {
    let agent = header_value("user agent", &identification.user_agent)?;
    let contact = header_value("contact", &identification.contact)?;

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, agent.clone());
    headers.insert(HeaderName::from_static(CLIENT_HEADER), agent);
    headers.insert(HeaderName::from_static(CONTACT_HEADER), contact);
    Ok(headers)
}

fn header_value(field: &'static str, raw: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(raw).map_err(|err| Error::InvalidIdentification {
        field,
        message: err.to_string(),
    })
}

/// Join `segments` onto the base URL for `host`, percent-encoding each one.
pub(crate) fn build_url(urls: &ApiUrls, host: ApiHost, segments: &[&str]) -> Result<Url> {
    let base = urls.base(host);
    let mut url = Url::parse(base).map_err(|err| Error::InvalidBaseUrl {
        url: base.to_string(),
        message: err.to_string(),
    })?;
    url.path_segments_mut()
        .map_err(|_| Error::InvalidBaseUrl {
            url: base.to_string(),
            message: "URL cannot be a base".to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout()
}

fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
