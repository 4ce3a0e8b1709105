//! HTTP client for posting the contact form to the server.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. Redirects are followed hop by hop here rather
//! than by the agent, so 307/308 re-POST the same body and the response can
//! report whether any hop was taken.

mod async_wrapper;
pub use async_wrapper::{AsyncFormClientImpl, FormTransport};

use crate::config::Config;
use crate::error::{SubmitError, SubmitResult};
use crate::form::FormValues;
use crate::metrics::{HttpTimer, Metrics};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Redirects followed per submission when none is configured.
const DEFAULT_MAX_REDIRECTS: u32 = 5;

/// What the transport observed once a submission resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResponse {
    /// Final HTTP status code
    pub status: u16,

    /// Reason phrase sent with the status
    pub status_text: String,

    /// URL of the final response, after any redirects
    pub url: String,

    /// Whether a redirect was followed to reach `url`
    pub redirected: bool,
}

impl SubmitResponse {
    /// Status in [200, 400).
    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.status)
    }
}

/// HTTP client for the form submission endpoint.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct FormClient {
    /// Endpoint the form is POSTed to
    submit_url: String,

    /// Redirect hops followed before giving up
    max_redirects: u32,

    /// HTTP client agent (never follows redirects itself)
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl FormClient {
    /// Create a new FormClient from configuration.
    pub fn new(config: &Config, metrics: Metrics) -> Self {
        Self {
            submit_url: config.submit_url.clone(),
            max_redirects: config.max_redirects,
            agent: Arc::new(Self::build_agent(config.timeout())),
            metrics,
        }
    }

    /// Create a FormClient with a custom endpoint (useful for testing).
    #[doc(hidden)]
    pub fn with_submit_url(submit_url: String) -> Self {
        Self {
            submit_url,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            agent: Arc::new(Self::build_agent(None)),
            metrics: Metrics::new(),
        }
    }

    fn build_agent(timeout: Option<Duration>) -> ureq::Agent {
        let builder = ureq::AgentBuilder::new().redirects(0);
        match timeout {
            Some(timeout) => builder.timeout(timeout).build(),
            None => builder.build(),
        }
    }

    /// Endpoint this client posts to.
    pub fn submit_url(&self) -> &str {
        &self.submit_url
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// POST the form values as JSON, following redirects.
    ///
    /// 301, 302 and 303 continue as a GET without a body; 307 and 308 repeat
    /// the POST with the same JSON. Statuses of 400 and above come back as
    /// `SubmitError::Status`.
    pub fn submit(&self, values: &FormValues) -> SubmitResult<SubmitResponse> {
        let body = serde_json::to_value(values)?;
        let start = Url::parse(&self.submit_url)
            .map_err(|e| SubmitError::InvalidUrl(format!("{}: {}", self.submit_url, e)))?;

        tracing::debug!("POST {}", start);
        tracing::trace!("Request body: {}", body);

        let timer = HttpTimer::new(self.metrics.clone());
        let result = self.follow(start, &body);
        let duration = timer.complete();

        match &result {
            Ok(response) => tracing::debug!(
                status = response.status,
                redirected = response.redirected,
                duration_ms = duration.as_millis() as u64,
                "POST {} - Resolved at {}",
                self.submit_url,
                response.url
            ),
            Err(e) => tracing::debug!("POST {} - Error: {:?}", self.submit_url, e),
        }

        result
    }

    /// Issue the request and walk the redirect chain.
    fn follow(&self, start: Url, body: &serde_json::Value) -> SubmitResult<SubmitResponse> {
        let mut url = start;
        let mut post = true;
        let mut hops = 0u32;

        loop {
            let request = if post {
                self.agent
                    .post(url.as_str())
                    .set("Content-Type", "application/json")
                    .send_json(body)
            } else {
                self.agent.get(url.as_str()).call()
            };
            let response = request.map_err(|e| self.map_error(e))?;
            let status = response.status();

            let location = match (is_redirect(status), response.header("location")) {
                (true, Some(location)) => location.to_string(),
                _ => {
                    return Ok(SubmitResponse {
                        status,
                        status_text: response.status_text().to_string(),
                        url: url.to_string(),
                        redirected: hops > 0,
                    })
                }
            };

            if hops >= self.max_redirects {
                return Err(SubmitError::Transport(format!(
                    "Too many redirects ({}) from {}",
                    hops, self.submit_url
                )));
            }

            let next = url.join(&location).map_err(|e| {
                SubmitError::Transport(format!("Invalid redirect location {}: {}", location, e))
            })?;
            if matches!(status, 301..=303) {
                post = false;
            }

            tracing::debug!(status, from = %url, to = %next, "Following redirect");
            url = next;
            hops += 1;
        }
    }

    /// Map a ureq error to a SubmitError.
    fn map_error(&self, error: ureq::Error) -> SubmitError {
        match error {
            ureq::Error::Status(status, response) => SubmitError::Status {
                status,
                status_text: response.status_text().to_string(),
            },
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    SubmitError::Transport("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io
                    && transport.to_string().contains("timed out")
                {
                    SubmitError::Timeout
                } else {
                    SubmitError::Transport(transport.to_string())
                }
            }
        }
    }
}

fn is_redirect(status: u16) -> bool {
    matches!(status, 301 | 302 | 303 | 307 | 308)
}
