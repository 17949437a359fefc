//! Execute Request Use Case
//!
//! Resolves a request against the suite configuration and sends it through
//! the `HttpClient` port.

use std::sync::Arc;

use reqcheck_domain::{DomainError, SuiteConfig, request::RequestSpec, response::ResponseSpec};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::ports::{HttpClient, HttpClientError};

/// Error type for the execute request use case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecuteRequestError {
    /// The request could not be resolved against the base URI.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] DomainError),

    /// The resolved URL cannot be sent.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP request failed.
    #[error("{0}")]
    Http(#[from] HttpClientError),
}

/// Use case for executing HTTP requests.
///
/// # Example
///
/// ```ignore
/// let use_case = ExecuteRequest::new(Arc::new(ReqwestHttpClient::new()?));
///
/// let request = RequestSpec::get("List users", "/api/users").with_query("page", 1);
/// let response = use_case.execute(&config, &request).await?;
/// ```
pub struct ExecuteRequest<C: HttpClient> {
    client: Arc<C>,
}

impl<C: HttpClient> ExecuteRequest<C> {
    /// Creates a new `ExecuteRequest` use case with the given HTTP client.
    pub const fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Resolves `request` against `config` and sends it.
    ///
    /// # Errors
    ///
    /// Returns `ExecuteRequestError` on resolution, validation or transport
    /// failures. An unexpected status is not an error here.
    pub async fn execute(
        &self,
        config: &SuiteConfig,
        request: &RequestSpec,
    ) -> Result<ResponseSpec, ExecuteRequestError> {
        let url = config.url_for(request)?;
        Self::validate(&url)?;

        debug!(
            request = %request.name,
            url = %url,
            "sending request"
        );

        let response = self.client.execute(&url, request).await?;

        debug!(
            request = %request.name,
            status = response.status,
            elapsed = %response.duration_display(),
            size = response.size,
            "response received"
        );

        Ok(response)
    }

    fn validate(url: &Url) -> Result<(), ExecuteRequestError> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ExecuteRequestError::InvalidUrl(format!(
                "URL must start with http:// or https://: {url}"
            )));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(ExecuteRequestError::InvalidUrl(format!(
                "URL has no host: {url}"
            )));
        }
        Ok(())
    }
}
