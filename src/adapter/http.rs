//! Marathon REST transport over HTTP.
//!
//! Joins resource paths onto the configured API base, sends JSON bodies and
//! decodes JSON responses. Non-2xx responses become
//! [`TransportError::Status`] carrying the response body so the caller sees
//! the orchestrator's own message (e.g. a 409 from a concurrent create).
//!
//! Only GET is retried, and only on timeout or connect failures. Mutating
//! requests are sent exactly once.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, warn};
use url::Url;

use crate::config::MarathonConfig;
use crate::error::TransportError;
use crate::port::{Transport, TransportResult};

#[derive(Debug)]
pub struct HttpTransport {
    http: HttpClient,
    base_url: String,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl HttpTransport {
    /// Create a transport with default client settings and no retry.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into(),
            retry_max_attempts: 1,
            retry_backoff_ms: 0,
        }
    }

    #[must_use]
    pub fn from_config(config: &MarathonConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.http.timeout_ms))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.url.clone(),
            retry_max_attempts: config.http.retry_max_attempts,
            retry_backoff_ms: config.http.retry_backoff_ms,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, TransportError> {
        let joined = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(Url::parse(&joined)?)
    }

    fn request(&self, method: Method, url: Url, body: Option<&Value>) -> RequestBuilder {
        let builder = self
            .http
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");
        match body {
            Some(body) => builder.json(body),
            None => builder,
        }
    }

    async fn send_once(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> TransportResult {
        let url = self.url(path)?;
        debug!(method = %method, url = %url, "Sending request");
        let response = self.request(method.clone(), url, body).send().await?;
        Self::decode(method_name(&method), path, response).await
    }

    async fn get_with_retry(&self, path: &str) -> TransportResult {
        let url = self.url(path)?;
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            debug!(url = %url, attempt, "Sending request");
            let response = match self.request(Method::GET, url.clone(), None).send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };
            return Self::decode("GET", path, response).await;
        }
    }

    async fn decode(method: &'static str, path: &str, response: Response) -> TransportResult {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                method,
                path: path.to_string(),
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }
}

fn method_name(method: &Method) -> &'static str {
    if *method == Method::GET {
        "GET"
    } else if *method == Method::POST {
        "POST"
    } else if *method == Method::PUT {
        "PUT"
    } else if *method == Method::DELETE {
        "DELETE"
    } else {
        "REQUEST"
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> TransportResult {
        self.get_with_retry(path).await
    }

    async fn post(&self, path: &str, body: Option<&Value>) -> TransportResult {
        self.send_once(Method::POST, path, body).await
    }

    async fn put(&self, path: &str, body: &Value) -> TransportResult {
        self.send_once(Method::PUT, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> TransportResult {
        self.send_once(Method::DELETE, path, None).await
    }
}
