//! Integration tests for the wire-level listing path using wiremock
//!
//! These drive `GcpHttpClient` and `fetch_instance_page` against mocked
//! zonal `instances.list` endpoints, verifying page parsing, bearer auth,
//! and error mapping for the response codes the compute API returns.

use serde_json::json;
use wiremock::matchers::{bearer_token, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vmsweep::gcp::http::{format_gcp_error, GcpHttpClient};
use vmsweep::sweep::fetch_instance_page;

#[tokio::test]
async fn test_fetch_page_parses_items_and_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/projects/test-project/zones/us-central1-a/instances",
        ))
        .and(bearer_token("test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"name": "instance-1", "status": "RUNNING"},
                {"name": "instance-2", "status": "STOPPED"}
            ],
            "nextPageToken": "token-page-2"
        })))
        .mount(&server)
        .await;

    let http = GcpHttpClient::new().expect("client should build");
    let page = fetch_instance_page(
        &http,
        &server.uri(),
        "test-token",
        "test-project",
        "us-central1-a",
    )
    .await
    .expect("fetch should succeed");

    assert_eq!(page.instances.len(), 2);
    assert_eq!(page.instances[0]["name"], "instance-1");
    assert_eq!(page.next_page_token.as_deref(), Some("token-page-2"));
}

#[tokio::test]
async fn test_fetch_page_empty_zone_is_success() {
    let server = MockServer::start().await;

    // Zones with no instances omit "items" entirely
    Mock::given(method("GET"))
        .and(path("/projects/test-project/zones/europe-west1-b/instances"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"kind": "compute#instanceList"})),
        )
        .mount(&server)
        .await;

    let http = GcpHttpClient::new().expect("client should build");
    let page = fetch_instance_page(
        &http,
        &server.uri(),
        "test-token",
        "test-project",
        "europe-west1-b",
    )
    .await
    .expect("zero matches is not a failure");

    assert!(page.instances.is_empty());
    assert!(page.next_page_token.is_none());
}

#[tokio::test]
async fn test_fetch_page_issues_exactly_one_request() {
    let server = MockServer::start().await;

    // Even when a continuation token is present, only the first page is read
    Mock::given(method("GET"))
        .and(path("/projects/test-project/zones/us-east1-b/instances"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"name": "instance-1"}],
            "nextPageToken": "more"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let http = GcpHttpClient::new().expect("client should build");
    let page = fetch_instance_page(
        &http,
        &server.uri(),
        "test-token",
        "test-project",
        "us-east1-b",
    )
    .await
    .expect("fetch should succeed");

    assert_eq!(page.next_page_token.as_deref(), Some("more"));
    server.verify().await;
}

#[tokio::test]
async fn test_401_maps_to_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/test-project/zones/us-central1-a/instances"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"code": 401, "message": "Invalid credentials"}
        })))
        .mount(&server)
        .await;

    let http = GcpHttpClient::new().expect("client should build");
    let err = fetch_instance_page(
        &http,
        &server.uri(),
        "bad-token",
        "test-project",
        "us-central1-a",
    )
    .await
    .expect_err("401 must be an error");

    assert!(err.to_string().contains("401"));
    assert!(format_gcp_error(&err).contains("Authentication failed"));
}

#[tokio::test]
async fn test_403_maps_to_permission_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/projects/restricted-project/zones/us-central1-a/instances",
        ))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"code": 403, "message": "Permission denied"}
        })))
        .mount(&server)
        .await;

    let http = GcpHttpClient::new().expect("client should build");
    let err = fetch_instance_page(
        &http,
        &server.uri(),
        "test-token",
        "restricted-project",
        "us-central1-a",
    )
    .await
    .expect_err("403 must be an error");

    assert!(format_gcp_error(&err).contains("Permission denied"));
}

#[tokio::test]
async fn test_404_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/test-project/zones/invalid-zone/instances"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": 404, "message": "Zone not found"}
        })))
        .mount(&server)
        .await;

    let http = GcpHttpClient::new().expect("client should build");
    let err = fetch_instance_page(
        &http,
        &server.uri(),
        "test-token",
        "test-project",
        "invalid-zone",
    )
    .await
    .expect_err("404 must be an error");

    assert_eq!(format_gcp_error(&err), "Resource not found.");
}
