//! Suite orchestration.

use std::sync::Arc;

use reqcheck_application::{
    CheckUsersPage, ConfigurationError, ConfigureEnvironment, ExecuteRequest, HttpClient,
    HttpClientError, ResponseVerifier,
};
use reqcheck_domain::SuiteConfig;
use reqcheck_infrastructure::{
    PropertiesEnvironmentRepository, ReqwestHttpClient, SerializationError, TestRunner,
    TokioFileSystem,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::report::{CheckKind, CheckOutcome, HarnessReport};
use crate::settings::{HarnessSettings, SettingsError};

/// Errors that stop the harness before or after the checks run.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Settings could not be read.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The environment could not be configured; no request was sent.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] HttpClientError),

    /// The report could not be rendered.
    #[error(transparent)]
    Report(#[from] SerializationError),
}

/// Runs both users listing checks for every page against one
/// configuration.
pub struct Harness<C: HttpClient, V> {
    checks: CheckUsersPage<C, V>,
    pages: Vec<u32>,
}

impl<C: HttpClient, V: ResponseVerifier> Harness<C, V> {
    /// Creates a harness over `client` and `verifier` for `pages`.
    pub fn new(client: C, verifier: V, pages: impl IntoIterator<Item = u32>) -> Self {
        Self {
            checks: CheckUsersPage::new(ExecuteRequest::new(Arc::new(client)), verifier),
            pages: pages.into_iter().collect(),
        }
    }

    /// Runs every check in order. A failing check never stops its
    /// siblings.
    pub async fn run(&self, config: &SuiteConfig) -> HarnessReport {
        let mut report = HarnessReport::start(config);

        for &page in &self.pages {
            report.record(self.assert_page(config, page).await);
            report.record(self.deserialize_page(config, page).await);
        }

        let report = report.finish();
        info!(
            run_id = %report.run_id,
            summary = %report.summary(),
            "suite finished"
        );
        report
    }

    async fn assert_page(&self, config: &SuiteConfig, page: u32) -> CheckOutcome {
        let kind = CheckKind::AssertPage;
        match self.checks.assert_page(config, page).await {
            Ok(results) => CheckOutcome::passed(
                kind,
                page,
                format!("{} assertions passed", results.passed),
            ),
            Err(e) => CheckOutcome::from_error(kind, page, &e),
        }
    }

    async fn deserialize_page(&self, config: &SuiteConfig, page: u32) -> CheckOutcome {
        let kind = CheckKind::DeserializePage;
        match self.checks.deserialize_page(config, page).await {
            Ok(users) if users.page == page => {
                let mut detail = format!("page {} with {} users", users.page, users.data.len());
                if users.is_last_page() {
                    detail.push_str(", last page");
                }
                CheckOutcome::passed(kind, page, detail)
            }
            Ok(users) => {
                warn!(requested = page, page = users.page, "typed page differs from requested page");
                CheckOutcome::failed(
                    kind,
                    page,
                    format!("expected typed page {page}, got {}", users.page),
                )
            }
            Err(e) => CheckOutcome::from_error(kind, page, &e),
        }
    }
}

/// Configures the selected environment from the resources directory, then
/// runs the checks over HTTP.
///
/// # Errors
///
/// Returns `HarnessError::Configuration` before any request is sent when the
/// environment cannot be configured, or `HarnessError::Client` if the HTTP
/// client cannot be built. Check failures are recorded in the report.
pub async fn run_suite(settings: &HarnessSettings) -> Result<HarnessReport, HarnessError> {
    let repository =
        PropertiesEnvironmentRepository::new(TokioFileSystem::new(), settings.resources_dir.clone());
    let config = ConfigureEnvironment::new(repository)
        .execute_selection(settings.environment.as_deref())
        .await?;

    let harness = Harness::new(
        ReqwestHttpClient::new()?,
        TestRunner::new(),
        settings.pages.iter().copied(),
    );
    Ok(harness.run(&config).await)
}
