//! Integration tests for the check_https library.
//!
//! These tests drive the public API against `httptest` mock servers over plain
//! HTTP. The stage functions taking a start URL make that possible; the
//! `https://<host>` variants differ only in the URL they start from.
//!
//! Tests that need a real HTTPS endpoint are marked `#[ignore]` and can be run
//! with `cargo test -- --ignored` when network access is available.

use std::time::Duration;

use check_https::check::{check_certificate, check_content_at, check_status_at};
use check_https::initialization::{init_client, init_crypto_provider};
use check_https::{
    follow_redirects, resolve_location, AcceptedStatusSet, CheckError, RedirectTrace,
    ServiceState, Target,
};
use httptest::{matchers::*, responders::*, Expectation, Server};

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn test_redirect_chain_across_absolute_and_relative_locations() {
    let server = Server::run();
    let absolute = server.url_str("/b");
    server.expect(
        Expectation::matching(request::method_path("GET", "/a"))
            .respond_with(status_code(302).insert_header("Location", absolute.as_str())),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/b"))
            .respond_with(status_code(307).insert_header("Location", "/c")),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/c"))
            .respond_with(status_code(200).body("done")),
    );

    let client = init_client("check_https", TIMEOUT).unwrap();
    let mut trace = RedirectTrace::new();
    let start = server.url_str("/a");
    let final_response = follow_redirects(&start, 20, &client, &mut trace)
        .await
        .expect("chain resolves");

    assert_eq!(final_response.status.as_u16(), 200);
    assert_eq!(final_response.url, server.url_str("/c"));
    assert_eq!(final_response.requests, 3);
    assert_eq!(
        trace.as_text(),
        format!(
            "{start} redirected (302 Found) to {absolute}\n\
             {absolute} redirected (307 Temporary Redirect) to /c\n"
        )
    );
}

#[tokio::test]
async fn test_status_stage_against_mock_server() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(302).insert_header("Location", "/login")),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/login"))
            .respond_with(status_code(401)),
    );

    let result = check_status_at(
        &server.url_str("/"),
        20,
        "check_https",
        TIMEOUT,
        &AcceptedStatusSet::default(),
    )
    .await;

    let evaluation = result.outcome.as_ref().expect("status evaluated");
    assert_eq!(evaluation.state, ServiceState::Critical);
    assert_eq!(evaluation.status, Some(401));
    assert_eq!(evaluation.value, "Unauthorized");
    assert_eq!(result.verbose.lines().count(), 1);
}

#[tokio::test]
async fn test_single_request_budget_evaluates_first_response() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .times(1)
            .respond_with(status_code(301).insert_header("Location", "/moved")),
    );

    let accepted: AcceptedStatusSet = "301".parse().unwrap();
    let result = check_status_at(&server.url_str("/"), 1, "check_https", TIMEOUT, &accepted).await;

    assert_eq!(result.state(), ServiceState::Ok);
    assert_eq!(result.outcome.unwrap().status, Some(301));
}

#[tokio::test]
async fn test_content_stage_against_mock_server() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(200).body("{\"status\":\"up\"}\n")),
    );

    let matched = check_content_at(&server.url_str("/"), "{", "check_https", TIMEOUT).await;
    assert_eq!(matched.state(), ServiceState::Ok);
    assert_eq!(matched.verbose, "Returned 2 lines of content.\n");

    let unmatched = check_content_at(&server.url_str("/"), "<>", "check_https", TIMEOUT).await;
    assert_eq!(unmatched.state(), ServiceState::Unknown);
}

#[tokio::test]
async fn test_slow_server_is_a_transport_error() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(delay_and_then(Duration::from_secs(3), status_code(200))),
    );

    let result = check_status_at(
        &server.url_str("/"),
        20,
        "check_https",
        Duration::from_millis(300),
        &AcceptedStatusSet::default(),
    )
    .await;

    match result.outcome {
        Err(CheckError::Transport(e)) => assert!(e.is_timeout(), "expected timeout, got {e}"),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn test_resolver_is_public() {
    assert_eq!(
        resolve_location("https://example.com/a", "/b").unwrap(),
        "https://example.com/b"
    );
    assert_eq!(
        resolve_location("https://example.com", "docs").unwrap(),
        "https://example.com/docs"
    );
    assert!(matches!(
        resolve_location("not a url", "/b"),
        Err(CheckError::InvalidRedirectTarget(_))
    ));
}

/// Requires network access to a public HTTPS site
#[tokio::test]
#[ignore]
async fn test_live_certificate_check() {
    init_crypto_provider();
    let target = Target::new("example.com").unwrap();
    let result = check_certificate(&target, 10, 5, Duration::from_secs(10)).await;

    let evaluation = result.outcome.as_ref().expect("certificate evaluated");
    assert!(evaluation.value.contains(", valid until "));
    assert!(result.verbose.starts_with("TLS Version used:  TLS 1."));
}
