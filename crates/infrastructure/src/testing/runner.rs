//! Test runner implementation.
//!
//! Executes assertions against HTTP responses and produces test results.

use std::time::Instant;

use reqcheck_application::ports::ResponseVerifier;
use reqcheck_domain::{Assertion, AssertionResult, ResponseSpec, TestResults, TestSuite};
use serde_json::Value;

/// Test runner that executes assertions against responses.
///
/// Every assertion in a suite runs, so a report shows all mismatches at
/// once.
#[derive(Debug, Default, Clone, Copy)]
pub struct TestRunner;

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run a test suite against a response.
    #[must_use]
    pub fn run(&self, suite: &TestSuite, response: &ResponseSpec) -> TestResults {
        let start = Instant::now();
        // Parsed once for every JSON assertion in the suite.
        let json = serde_json::from_str::<Value>(&response.body)
            .map_err(|e| format!("body is not valid JSON: {e}"));

        let results = suite
            .assertions
            .iter()
            .map(|assertion| match assertion {
                Assertion::StatusCode { expected } => {
                    check_status_code(assertion, response, *expected)
                }
                Assertion::JsonPath { path, expected } => {
                    check_json_path(assertion, json.as_ref(), path, expected)
                }
            })
            .collect();

        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        TestResults::new(&suite.name, results, duration_ms)
    }
}

impl ResponseVerifier for TestRunner {
    fn verify(&self, suite: &TestSuite, response: &ResponseSpec) -> TestResults {
        self.run(suite, response)
    }
}

fn check_status_code(
    assertion: &Assertion,
    response: &ResponseSpec,
    expected: u16,
) -> AssertionResult {
    let actual = response.status;
    if actual == expected {
        AssertionResult::pass(assertion.clone(), actual.to_string())
    } else {
        AssertionResult::fail_with_value(
            assertion.clone(),
            actual.to_string(),
            format!("expected status {expected}, got {}", response.status_code()),
        )
    }
}

fn check_json_path(
    assertion: &Assertion,
    json: Result<&Value, &String>,
    path: &str,
    expected: &Value,
) -> AssertionResult {
    let json = match json {
        Ok(json) => json,
        Err(e) => return AssertionResult::fail(assertion.clone(), e.clone()),
    };

    match query_json_path(json, path) {
        Ok(Some(value)) if value == expected => {
            AssertionResult::pass(assertion.clone(), value.to_string())
        }
        Ok(Some(value)) => AssertionResult::fail_with_value(
            assertion.clone(),
            value.to_string(),
            format!("JSON path '{path}' expected {expected}, got {value}"),
        ),
        Ok(None) => {
            AssertionResult::fail(assertion.clone(), format!("JSON path '{path}' not found"))
        }
        Err(e) => {
            AssertionResult::fail(assertion.clone(), format!("invalid JSON path '{path}': {e}"))
        }
    }
}

/// Query a JSON value using a simple JSONPath-like syntax.
/// Supports: `$`, `$.field`, `$.field.nested`, `$.array[0].field`
fn query_json_path<'a>(json: &'a Value, path: &str) -> Result<Option<&'a Value>, String> {
    let Some(rest) = path.trim().strip_prefix('$') else {
        return Err("JSON path must start with '$'".to_string());
    };

    let mut current = json;
    for segment in rest.split('.').filter(|s| !s.is_empty()) {
        let (name, index) = match segment.split_once('[') {
            Some((name, index)) => {
                let index = index
                    .strip_suffix(']')
                    .ok_or_else(|| format!("unclosed bracket in '{segment}'"))?;
                let index: usize = index
                    .parse()
                    .map_err(|_| format!("invalid array index: {index}"))?;
                (name, Some(index))
            }
            None => (segment, None),
        };

        if !name.is_empty() {
            match current.get(name) {
                Some(v) => current = v,
                None => return Ok(None),
            }
        }
        if let Some(index) = index {
            match current.get(index) {
                Some(v) => current = v,
                None => return Ok(None),
            }
        }
    }

    Ok(Some(current))
}
