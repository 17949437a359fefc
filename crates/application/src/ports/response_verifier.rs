//! Response verification port

use reqcheck_domain::{ResponseSpec, TestResults, TestSuite};

/// Evaluates a suite of assertions against a response.
pub trait ResponseVerifier: Send + Sync {
    /// Runs every assertion in `suite` and collects the outcomes.
    fn verify(&self, suite: &TestSuite, response: &ResponseSpec) -> TestResults;
}
