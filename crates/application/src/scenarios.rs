//! Fixed scenario data for the users listing checks.

use reqcheck_domain::{Assertion, RequestSpec, TestSuite};

/// Users listing endpoint, relative to the base URI.
pub const USERS_ENDPOINT: &str = "/api/users";

/// Page numbers every check is run for.
pub const PAGE_NUMBERS: [u32; 2] = [1, 2];

/// Builds `GET /api/users?page={page}`.
#[must_use]
pub fn users_request(page: u32) -> RequestSpec {
    RequestSpec::get(format!("List users page {page}"), USERS_ENDPOINT)
        .with_query("page", page)
        .with_header("Accept", "application/json")
}

/// Status must be 200 and the body's `page` must echo the requested page.
#[must_use]
pub fn users_page_suite(page: u32) -> TestSuite {
    TestSuite::new(format!("Users listing page {page}"))
        .with_assertion(Assertion::status(200))
        .with_assertion(Assertion::json_equals("$.page", page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_users_request() {
        let request = users_request(2);
        assert_eq!(request.path, "/api/users");
        assert_eq!(request.query.pairs().collect::<Vec<_>>(), vec![("page", "2")]);
    }

    #[test]
    fn test_users_page_suite() {
        let suite = users_page_suite(1);
        assert_eq!(
            suite.assertions,
            vec![Assertion::status(200), Assertion::json_equals("$.page", 1u32)]
        );
    }
}
