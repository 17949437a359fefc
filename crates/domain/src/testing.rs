//! Response testing and assertions.
//!
//! Checks are declared here and evaluated in the infrastructure layer.

use serde::{Deserialize, Serialize};

/// A test assertion to run against a response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Assertion {
    /// Response status equals `expected`.
    StatusCode {
        /// Expected status code.
        expected: u16,
    },
    /// The JSON value at `path` equals `expected`.
    JsonPath {
        /// Path expression such as `$.page` or `$.data[0].id`.
        path: String,
        /// Expected value.
        expected: serde_json::Value,
    },
}

impl Assertion {
    /// Asserts the response status equals `code`.
    #[must_use]
    pub const fn status(code: u16) -> Self {
        Self::StatusCode { expected: code }
    }

    /// Asserts the JSON value at `path` equals `expected`.
    #[must_use]
    pub fn json_equals(path: impl Into<String>, expected: impl Into<serde_json::Value>) -> Self {
        Self::JsonPath {
            path: path.into(),
            expected: expected.into(),
        }
    }

    /// Human-readable description of this assertion.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::StatusCode { expected } => format!("Status code = {expected}"),
            Self::JsonPath { path, expected } => format!("JSON {path} equals {expected}"),
        }
    }
}

/// Result of running a single assertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssertionResult {
    /// The assertion that was run.
    pub assertion: Assertion,
    /// Whether the assertion passed.
    pub passed: bool,
    /// Actual value found, when there was one.
    pub actual: Option<String>,
    /// Error message if failed.
    pub error: Option<String>,
}

impl AssertionResult {
    /// Create a passed result with the actual value.
    #[must_use]
    pub fn pass(assertion: Assertion, actual: impl Into<String>) -> Self {
        Self {
            assertion,
            passed: true,
            actual: Some(actual.into()),
            error: None,
        }
    }

    /// Create a failed result without an actual value.
    #[must_use]
    pub fn fail(assertion: Assertion, error: impl Into<String>) -> Self {
        Self {
            assertion,
            passed: false,
            actual: None,
            error: Some(error.into()),
        }
    }

    /// Create a failed result with the actual value.
    #[must_use]
    pub fn fail_with_value(
        assertion: Assertion,
        actual: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            actual: Some(actual.into()),
            ..Self::fail(assertion, error)
        }
    }
}

/// A named group of assertions evaluated against one response.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TestSuite {
    /// Test suite name.
    pub name: String,
    /// Assertions to run, in order.
    #[serde(default)]
    pub assertions: Vec<Assertion>,
}

impl TestSuite {
    /// Create a new empty test suite.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assertions: Vec::new(),
        }
    }

    /// Add an assertion (builder pattern).
    #[must_use]
    pub fn with_assertion(mut self, assertion: Assertion) -> Self {
        self.assertions.push(assertion);
        self
    }
}

/// Results from running a test suite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestResults {
    /// Test suite that was run.
    pub suite_name: String,
    /// Individual assertion results.
    pub results: Vec<AssertionResult>,
    /// Total number of assertions evaluated.
    pub total: usize,
    /// Number of passed assertions.
    pub passed: usize,
    /// Number of failed assertions.
    pub failed: usize,
    /// Execution time in milliseconds.
    pub duration_ms: u64,
}

impl TestResults {
    /// Create new test results.
    #[must_use]
    pub fn new(
        suite_name: impl Into<String>,
        results: Vec<AssertionResult>,
        duration_ms: u64,
    ) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();

        Self {
            suite_name: suite_name.into(),
            results,
            total,
            passed,
            failed: total - passed,
            duration_ms,
        }
    }

    /// Check if all tests passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// One entry per failed assertion, description then error detail,
    /// joined with `"; "`.
    #[must_use]
    pub fn failure_summary(&self) -> String {
        self.results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| {
                format!(
                    "{}: {}",
                    r.assertion.description(),
                    r.error.as_deref().unwrap_or("failed")
                )
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_assertion_description() {
        assert_eq!(Assertion::status(200).description(), "Status code = 200");
        assert_eq!(
            Assertion::json_equals("$.page", 2).description(),
            "JSON $.page equals 2"
        );
    }

    #[test]
    fn test_assertion_serde_tagged() {
        let json = serde_json::to_value(Assertion::json_equals("$.page", 1)).unwrap_or_default();
        assert_eq!(
            json,
            serde_json::json!({"type": "json_path", "path": "$.page", "expected": 1})
        );
    }

    #[test]
    fn test_suite_builder() {
        let suite = TestSuite::new("Users listing page 1")
            .with_assertion(Assertion::status(200))
            .with_assertion(Assertion::json_equals("$.page", 1));

        assert_eq!(suite.name, "Users listing page 1");
        assert_eq!(suite.assertions.len(), 2);
    }

    #[test]
    fn test_results_summary() {
        let results = vec![
            AssertionResult::pass(Assertion::status(200), "200"),
            AssertionResult::fail_with_value(
                Assertion::json_equals("$.page", 2),
                "1",
                "expected 2, got 1",
            ),
            AssertionResult::fail(Assertion::json_equals("$.total", 12), "not found"),
        ];

        let test_results = TestResults::new("Suite", results, 3);
        assert_eq!(test_results.total, 3);
        assert_eq!(test_results.passed, 1);
        assert_eq!(test_results.failed, 2);
        assert!(!test_results.all_passed());
        assert_eq!(
            test_results.failure_summary(),
            "JSON $.page equals 2: expected 2, got 1; JSON $.total equals 12: not found"
        );
    }
}
