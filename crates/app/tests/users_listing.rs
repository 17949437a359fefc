//! End-to-end harness runs against a mock users API.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use reqcheck::{CheckKind, CheckStatus, HarnessError, HarnessSettings, run_suite};
use reqcheck_application::{ConfigurationError, ConfigureEnvironment};
use reqcheck_infrastructure::{PropertiesEnvironmentRepository, TokioFileSystem};
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn users_page(page: Value) -> Value {
    json!({
        "page": page,
        "per_page": 6,
        "total": 12,
        "total_pages": 2,
        "data": [
            {
                "id": 7,
                "email": "michael.lawson@reqres.in",
                "first_name": "Michael",
                "last_name": "Lawson",
                "avatar": "https://reqres.in/img/faces/7-image.jpg"
            }
        ],
        "support": {
            "url": "https://contentcaddy.io",
            "text": "Tired of writing endless social media content?"
        }
    })
}

async fn mount_page(server: &MockServer, requested: u32, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", requested.to_string()))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Writes `<label>.properties` pointing at `base_uri` into a fresh directory.
fn resources(label: &str, base_uri: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(format!("{label}.properties")),
        format!("# generated for tests\nbaseURI={base_uri}\n"),
    )
    .unwrap();
    dir
}

fn settings(dir: &Path) -> HarnessSettings {
    HarnessSettings::default()
        .with_environment("test")
        .with_resources_dir(dir)
}

#[tokio::test]
async fn both_pages_pass_assertions_and_deserialize() {
    let server = MockServer::start().await;
    mount_page(&server, 1, users_page(json!(1))).await;
    mount_page(&server, 2, users_page(json!(2))).await;
    let dir = resources("test", &server.uri());

    let report = run_suite(&settings(dir.path())).await.unwrap();

    assert!(report.all_passed(), "{:#?}", report.outcomes);
    assert_eq!(report.environment, "test");
    let names: Vec<_> = report.outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "assert_page[1]",
            "deserialize_page[1]",
            "assert_page[2]",
            "deserialize_page[2]"
        ]
    );
    assert_eq!(report.summary().passed, 4);
    assert_eq!(
        report.outcomes[1].detail.as_deref(),
        Some("page 1 with 1 users")
    );
    assert_eq!(
        report.outcomes[3].detail.as_deref(),
        Some("page 2 with 1 users, last page")
    );
}

#[tokio::test]
async fn run_without_pages_does_not_pass() {
    let server = MockServer::start().await;
    let dir = resources("test", &server.uri());

    let report = run_suite(&settings(dir.path()).with_pages([]))
        .await
        .unwrap();

    assert!(report.outcomes.is_empty());
    assert!(!report.all_passed());
}

#[tokio::test]
async fn default_environment_is_prod_from_shipped_resources() {
    let shipped = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../resources");
    let repository = PropertiesEnvironmentRepository::new(TokioFileSystem::new(), shipped);

    let config = ConfigureEnvironment::new(repository)
        .execute_selection(None)
        .await
        .unwrap();

    assert_eq!(config.label().as_str(), "prod");
    assert_eq!(config.base_uri().as_str(), "https://reqres.in/");
}

#[tokio::test]
async fn page_as_string_is_a_structural_error() {
    let server = MockServer::start().await;
    mount_page(&server, 1, users_page(json!("1"))).await;
    let dir = resources("test", &server.uri());

    let report = run_suite(&settings(dir.path()).with_pages([1]))
        .await
        .unwrap();

    let assert = &report.outcomes[0];
    assert_eq!(assert.kind, CheckKind::AssertPage);
    assert_eq!(assert.status, CheckStatus::Failed);

    let deserialize = &report.outcomes[1];
    assert_eq!(deserialize.kind, CheckKind::DeserializePage);
    assert_eq!(deserialize.status, CheckStatus::Errored);
    let detail = deserialize.detail.as_deref().unwrap();
    assert!(detail.contains("is not a users page"), "{detail}");
    assert!(detail.contains("invalid type"), "{detail}");
}

#[tokio::test]
async fn missing_environment_aborts_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let dir = resources("test", &server.uri());

    let err = run_suite(&settings(dir.path()).with_environment("staging"))
        .await
        .unwrap_err();

    match err {
        HarnessError::Configuration(ConfigurationError::NotFound {
            label, available, ..
        }) => {
            assert_eq!(label, "staging");
            assert_eq!(available, vec!["test".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_base_uri_aborts_setup() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("test.properties"), "timeout=5000\n").unwrap();

    let err = run_suite(&settings(dir.path())).await.unwrap_err();

    assert!(matches!(
        err,
        HarnessError::Configuration(ConfigurationError::MissingBaseUri { .. })
    ));
}

#[tokio::test]
async fn page_mismatch_fails_without_stopping_other_checks() {
    let server = MockServer::start().await;
    mount_page(&server, 1, users_page(json!(1))).await;
    mount_page(&server, 2, users_page(json!(3))).await;
    let dir = resources("test", &server.uri());

    let report = run_suite(&settings(dir.path())).await.unwrap();

    let statuses: Vec<_> = report.outcomes.iter().map(|o| o.status).collect();
    assert_eq!(
        statuses,
        vec![
            CheckStatus::Passed,
            CheckStatus::Passed,
            CheckStatus::Failed,
            CheckStatus::Failed
        ]
    );
    let detail = report.outcomes[2].detail.as_deref().unwrap();
    assert!(detail.contains("expected 2, got 3"), "{detail}");
    assert_eq!(
        report.outcomes[3].detail.as_deref(),
        Some("expected typed page 2, got 3")
    );
}

#[tokio::test]
async fn base_uri_path_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/api/users"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page(json!(1))))
        .expect(2)
        .mount(&server)
        .await;
    let dir = resources("test", &format!("{}/v1/", server.uri()));

    let report = run_suite(&settings(dir.path()).with_pages([1]))
        .await
        .unwrap();

    assert!(report.all_passed(), "{:#?}", report.outcomes);
}

#[tokio::test]
async fn unreachable_server_errors_every_check() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let dir = resources("test", &format!("http://127.0.0.1:{port}"));

    let report = run_suite(&settings(dir.path())).await.unwrap();

    assert_eq!(report.summary().errored, 4);
    assert!(!report.all_passed());
}

#[tokio::test]
#[ignore = "requires network access to reqres.in"]
async fn live_reqres_users_listing() {
    let shipped = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../resources");
    let report = run_suite(&HarnessSettings::default().with_resources_dir(shipped))
        .await
        .unwrap();

    assert!(report.all_passed(), "{:#?}", report.outcomes);
}
