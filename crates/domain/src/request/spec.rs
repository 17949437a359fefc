//! Request specification type

use serde::{Deserialize, Serialize};
use url::Url;

use super::QueryParams;
use crate::error::{DomainError, DomainResult};

/// Complete specification for a GET request relative to a base URI.
///
/// The base URI is never stored here: it belongs to the suite
/// configuration and is supplied when the request is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// Human-readable name, used in logs and reports
    pub name: String,
    /// Endpoint path relative to the base URI, e.g. `/api/users`
    pub path: String,
    /// Query parameters
    #[serde(default)]
    pub query: QueryParams,
    /// Extra request headers as `(name, value)` pairs
    #[serde(default)]
    pub headers: Vec<(String, String)>,
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    RequestSpec::DEFAULT_TIMEOUT_MS
}

impl RequestSpec {
    /// Timeout applied when none is configured.
    pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

    /// Creates a GET request for the given endpoint path.
    #[must_use]
    pub fn get(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            query: QueryParams::new(),
            headers: Vec::new(),
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
        }
    }

    /// Sets a query parameter (builder pattern).
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.set(key, value);
        self
    }

    /// Adds a request header (builder pattern).
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Overrides the request timeout (builder pattern).
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Resolves this request against `base` into an absolute URL.
    ///
    /// The endpoint path is appended to whatever path the base already has,
    /// so `https://host/v1` + `/api/users` gives `https://host/v1/api/users`.
    /// Query parameters are appended after any query on the base.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPath` if the path is not a relative path
    /// starting with `/`.
    pub fn resolve_url(&self, base: &Url) -> DomainResult<Url> {
        if !self.path.starts_with('/') || self.path.contains("://") || self.path.contains('?') {
            return Err(DomainError::InvalidPath(self.path.clone()));
        }

        let mut url = base.clone();
        let joined = format!("{}{}", base.path().trim_end_matches('/'), self.path);
        url.set_path(&joined);
        url.set_fragment(None);

        let mut pairs = self.query.pairs().peekable();
        if pairs.peek().is_some() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn test_get_request() {
        let req = RequestSpec::get("List users", "/api/users");
        assert_eq!(req.path, "/api/users");
        assert_eq!(req.timeout_ms, RequestSpec::DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_resolve_with_page_query() {
        let req = RequestSpec::get("List users", "/api/users").with_query("page", 2);
        let url = req.resolve_url(&base("https://reqres.in")).unwrap();
        assert_eq!(url.as_str(), "https://reqres.in/api/users?page=2");
    }

    #[test]
    fn test_resolve_without_query_has_no_question_mark() {
        let req = RequestSpec::get("List users", "/api/users");
        let url = req.resolve_url(&base("https://reqres.in/")).unwrap();
        assert_eq!(url.as_str(), "https://reqres.in/api/users");
    }

    #[test]
    fn test_resolve_keeps_base_path() {
        let req = RequestSpec::get("List users", "/api/users").with_query("page", 1);
        let url = req.resolve_url(&base("http://127.0.0.1:8080/mock/")).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/mock/api/users?page=1");
    }

    #[test]
    fn test_resolve_rejects_absolute_path() {
        let req = RequestSpec::get("Bad", "https://elsewhere.example/api");
        assert!(matches!(
            req.resolve_url(&base("https://reqres.in")),
            Err(DomainError::InvalidPath(_))
        ));

        let req = RequestSpec::get("Bad", "api/users");
        assert!(req.resolve_url(&base("https://reqres.in")).is_err());
    }

    #[test]
    fn test_builder_headers_and_timeout() {
        let req = RequestSpec::get("List users", "/api/users")
            .with_header("Accept", "application/json")
            .with_timeout_ms(5_000);
        assert_eq!(
            req.headers,
            vec![("Accept".to_string(), "application/json".to_string())]
        );
        assert_eq!(req.timeout_ms, 5_000);
    }
}
