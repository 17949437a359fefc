//! Users listing checks
//!
//! Two checks per page number: one asserts the status and the echoed
//! `page` field, the other deserializes the whole body into [`UserPage`].

use reqcheck_domain::{SuiteConfig, TestResults, UserPage};
use thiserror::Error;
use tracing::{info, warn};

use super::{ExecuteRequest, ExecuteRequestError};
use crate::ports::{HttpClient, ResponseVerifier};
use crate::scenarios::{users_page_suite, users_request};

/// Why a users listing check did not pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckError {
    /// The request could not be sent or no response arrived.
    #[error(transparent)]
    Request(#[from] ExecuteRequestError),

    /// The response arrived but did not satisfy the assertions.
    #[error("{} of {} assertions failed: {}", .0.failed, .0.total, .0.failure_summary())]
    AssertionFailed(TestResults),

    /// The body does not match the users listing schema.
    #[error("response body (status {status}) is not a users page: {message}")]
    Deserialization {
        /// HTTP status of the response.
        status: u16,
        /// Deserializer message, including line and column.
        message: String,
        /// Start of the offending body.
        body_preview: String,
    },
}

/// Runs the users listing checks for one page at a time.
pub struct CheckUsersPage<C: HttpClient, V> {
    execute: ExecuteRequest<C>,
    verifier: V,
}

impl<C: HttpClient, V: ResponseVerifier> CheckUsersPage<C, V> {
    const PREVIEW_CHARS: usize = 200;

    /// Creates the checks on top of a request executor and a verifier.
    pub const fn new(execute: ExecuteRequest<C>, verifier: V) -> Self {
        Self { execute, verifier }
    }

    /// Requests `page` and asserts status 200 and `body.page == page`.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::AssertionFailed` with the full results when any
    /// assertion fails, or `CheckError::Request` on transport failure.
    pub async fn assert_page(
        &self,
        config: &SuiteConfig,
        page: u32,
    ) -> Result<TestResults, CheckError> {
        let response = self.execute.execute(config, &users_request(page)).await?;
        let results = self.verifier.verify(&users_page_suite(page), &response);

        if results.all_passed() {
            Ok(results)
        } else {
            warn!(page, failures = %results.failure_summary(), "users page assertions failed");
            Err(CheckError::AssertionFailed(results))
        }
    }

    /// Requests `page` and deserializes the body into a [`UserPage`].
    ///
    /// The status is not asserted: a body that does not fit the schema is
    /// the failure.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Deserialization` when the body does not match
    /// the schema, or `CheckError::Request` on transport failure.
    pub async fn deserialize_page(
        &self,
        config: &SuiteConfig,
        page: u32,
    ) -> Result<UserPage, CheckError> {
        let response = self.execute.execute(config, &users_request(page)).await?;

        let users: UserPage =
            serde_json::from_str(&response.body).map_err(|e| CheckError::Deserialization {
                status: response.status,
                message: e.to_string(),
                body_preview: response.body_preview(Self::PREVIEW_CHARS),
            })?;

        info!(
            requested = page,
            page = users.page,
            users = users.data.len(),
            total = users.total,
            "response body deserialized"
        );

        Ok(users)
    }
}
