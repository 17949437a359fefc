//! reqcheck harness
//!
//! Loads the selected environment once, then runs the users listing checks
//! for every configured page and collects the outcomes into a report.

pub mod harness;
pub mod logging;
pub mod report;
pub mod settings;

pub use harness::{Harness, HarnessError, run_suite};
pub use report::{CheckKind, CheckOutcome, CheckStatus, HarnessReport, ReportSummary};
pub use settings::{HarnessSettings, ReportFormat, SettingsError};
