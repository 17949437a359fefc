//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It handles all HTTP communication for the harness.

use std::collections::HashMap;
use std::error::Error as _;
use std::time::{Duration, Instant};

use reqcheck_application::ports::{HttpClient, HttpClientError, HttpFuture};
use reqcheck_domain::{request::RequestSpec, response::ResponseSpec};
use reqwest::Client;
use url::Url;

/// HTTP client implementation using reqwest.
///
/// Wraps a single `reqwest::Client` so connections are pooled across
/// checks.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    const MAX_REDIRECTS: usize = 10;

    /// Creates a new HTTP client with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "reqcheck/<version>"
    ///
    /// Timeouts are applied per request from `RequestSpec::timeout_ms`.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(concat!("reqcheck/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(Self::MAX_REDIRECTS))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Flattens an error and its sources into one message.
    ///
    /// reqwest's own `Display` hides the cause ("connection refused",
    /// "dns error"), which lives further down the source chain.
    fn error_chain(error: &reqwest::Error) -> String {
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }

    /// Maps reqwest errors to port `HttpClientError`.
    fn map_error(error: &reqwest::Error, url: &Url, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        let host = url.host_str().unwrap_or("unknown").to_string();

        if error.is_connect() {
            let message = Self::error_chain(error);
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lowered.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host,
                    port: url.port_or_known_default().unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects {
                max: Self::MAX_REDIRECTS,
            };
        }

        HttpClientError::Other(Self::error_chain(error))
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute<'a>(&'a self, url: &'a Url, request: &'a RequestSpec) -> HttpFuture<'a> {
        Box::pin(async move {
            let timeout_ms = request.timeout_ms;

            let start = Instant::now();

            let mut builder = self
                .client
                .get(url.clone())
                .timeout(Duration::from_millis(timeout_ms));

            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, url, timeout_ms))?;

            let status = response.status().as_u16();

            let headers: HashMap<String, String> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
                .collect();

            let body = response
                .bytes()
                .await
                .map_err(|e| {
                    if e.is_timeout() {
                        HttpClientError::Timeout { timeout_ms }
                    } else {
                        HttpClientError::BodyRead(Self::error_chain(&e))
                    }
                })?
                .to_vec();

            Ok(ResponseSpec::new(status, headers, body, start.elapsed()))
        })
    }
}
