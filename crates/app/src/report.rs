//! Run report: one outcome per check, plus run metadata.

use std::fmt;

use chrono::{DateTime, Utc};
use reqcheck_application::CheckError;
use reqcheck_domain::SuiteConfig;
use reqcheck_infrastructure::{SerializationError, to_json_stable};
use serde::Serialize;
use uuid::Uuid;

/// Which of the two users listing checks ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Status and `page` field assertions.
    AssertPage,
    /// Typed deserialization of the body.
    DeserializePage,
}

impl CheckKind {
    /// Short name used in check names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AssertPage => "assert_page",
            Self::DeserializePage => "deserialize_page",
        }
    }
}

/// Result of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Every expectation held.
    Passed,
    /// The response arrived but an expectation did not hold.
    Failed,
    /// No usable response: transport failure or a body that is not a
    /// users page.
    Errored,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Passed => "PASS",
            Self::Failed => "FAIL",
            Self::Errored => "ERROR",
        })
    }
}

/// Outcome of one check for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// Check name, e.g. `assert_page[2]`.
    pub name: String,
    /// Which check ran.
    pub kind: CheckKind,
    /// Requested page.
    pub page: u32,
    /// Pass, fail or error.
    pub status: CheckStatus,
    /// Failure detail, or what passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckOutcome {
    /// A passing outcome.
    #[must_use]
    pub fn passed(kind: CheckKind, page: u32, detail: impl Into<String>) -> Self {
        Self::new(kind, page, CheckStatus::Passed, Some(detail.into()))
    }

    /// A failing outcome.
    #[must_use]
    pub fn failed(kind: CheckKind, page: u32, detail: impl Into<String>) -> Self {
        Self::new(kind, page, CheckStatus::Failed, Some(detail.into()))
    }

    /// Classifies a check error: assertion mismatches fail, everything
    /// else errors.
    #[must_use]
    pub fn from_error(kind: CheckKind, page: u32, error: &CheckError) -> Self {
        let status = match error {
            CheckError::AssertionFailed(_) => CheckStatus::Failed,
            CheckError::Request(_) | CheckError::Deserialization { .. } => CheckStatus::Errored,
        };
        Self::new(kind, page, status, Some(error.to_string()))
    }

    fn new(kind: CheckKind, page: u32, status: CheckStatus, detail: Option<String>) -> Self {
        Self {
            name: format!("{}[{page}]", kind.as_str()),
            kind,
            page,
            status,
            detail,
        }
    }

    /// Whether the check passed.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.status, CheckStatus::Passed)
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<5} {}", self.status, self.name)?;
        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

/// Counts per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReportSummary {
    /// Checks run.
    pub total: usize,
    /// Checks passed.
    pub passed: usize,
    /// Checks failed.
    pub failed: usize,
    /// Checks errored.
    pub errored: usize,
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} checks: {} passed, {} failed, {} errored",
            self.total, self.passed, self.failed, self.errored
        )
    }
}

/// Everything one harness run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarnessReport {
    /// Unique, time-ordered run id.
    pub run_id: Uuid,
    /// When the first check started.
    pub started_at: DateTime<Utc>,
    /// When the last check finished.
    pub finished_at: DateTime<Utc>,
    /// Environment label the run used.
    pub environment: String,
    /// Base URI every request was resolved against.
    pub base_uri: String,
    /// Outcomes in execution order.
    pub outcomes: Vec<CheckOutcome>,
}

impl HarnessReport {
    /// Starts an empty report for `config`.
    #[must_use]
    pub fn start(config: &SuiteConfig) -> Self {
        let now = Utc::now();
        Self {
            run_id: Uuid::now_v7(),
            started_at: now,
            finished_at: now,
            environment: config.label().to_string(),
            base_uri: config.base_uri().to_string(),
            outcomes: Vec::new(),
        }
    }

    /// Appends an outcome.
    pub fn record(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    /// Stamps the finish time.
    #[must_use]
    pub fn finish(mut self) -> Self {
        self.finished_at = Utc::now();
        self
    }

    /// Counts outcomes per status.
    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        self.outcomes
            .iter()
            .fold(ReportSummary::default(), |mut summary, outcome| {
                summary.total += 1;
                match outcome.status {
                    CheckStatus::Passed => summary.passed += 1,
                    CheckStatus::Failed => summary.failed += 1,
                    CheckStatus::Errored => summary.errored += 1,
                }
                summary
            })
    }

    /// Whether at least one check ran and every check passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        !self.outcomes.is_empty() && self.outcomes.iter().all(CheckOutcome::is_passed)
    }

    /// Renders the report as stable JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, SerializationError> {
        to_json_stable(self)
    }
}
