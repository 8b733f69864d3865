//! Tests to ensure hard-error messages printed on stdout are actionable.
//!
//! The plugin output is often the only thing an operator sees, so the message
//! must carry the underlying cause, not just the failing step.

use std::time::Duration;

use check_https::check::{check_content_at, check_status_at};
use check_https::error_handling::{categorize_check_error, render_error_chain, ErrorType};
use check_https::{AcceptedStatusSet, CheckError};

#[tokio::test]
async fn test_connection_refused_names_the_cause() {
    let result = check_status_at(
        "http://127.0.0.1:9/",
        20,
        "check_https",
        Duration::from_secs(2),
        &AcceptedStatusSet::default(),
    )
    .await;

    let err = result.outcome.expect_err("closed port must fail");
    let rendered = render_error_chain(&err);
    assert!(rendered.starts_with("HTTP request failed: "), "{rendered}");
    // reqwest's own message only names the URL; the chain adds the reason
    assert!(
        rendered.matches(": ").count() >= 2,
        "cause missing from {rendered}"
    );
}

#[tokio::test]
async fn test_content_transport_error_is_categorized() {
    let result = check_content_at(
        "http://127.0.0.1:9/",
        "<!DOCTYPE HTML>",
        "check_https",
        Duration::from_secs(2),
    )
    .await;

    let err = result.outcome.expect_err("closed port must fail");
    assert!(matches!(
        categorize_check_error(&err),
        ErrorType::HttpRequestConnectError
            | ErrorType::HttpRequestRequestError
            | ErrorType::HttpRequestTimeoutError
    ));
}

#[test]
fn test_certificate_errors_are_prefixed() {
    let connect = CheckError::Connect {
        host: "example.com".to_string(),
        port: 443,
        source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
    };
    assert_eq!(
        render_error_chain(&connect),
        "TLS error: failed to connect to example.com:443: connection refused"
    );

    let timeout = CheckError::Timeout {
        step: "TCP connect",
        host: "example.com".to_string(),
        seconds: 30,
    };
    assert_eq!(
        render_error_chain(&timeout),
        "TLS error: TCP connect timed out for example.com after 30s"
    );
}

#[test]
fn test_invalid_redirect_target_names_the_url() {
    let err = CheckError::InvalidRedirectTarget("example.com/path".to_string());
    assert_eq!(
        err.to_string(),
        "check http status: could not parse a valid URL from example.com/path"
    );
}
