//! Web content stage.

use std::time::Duration;

use log::debug;

use crate::check::{CheckResult, ServiceState, Target};
use crate::error_handling::CheckError;
use crate::initialization::init_client;

/// Whether `body` contains any character of `expected`.
///
/// This is a deliberately weak match: `"<!DOCTYPE HTML>"` is satisfied by any
/// body containing `<`, `!`, a space, or any other of its characters. An empty
/// `expected` never matches.
pub fn content_matches(body: &str, expected: &str) -> bool {
    body.chars().any(|c| expected.contains(c))
}

/// Number of lines in `body` when split on `\n`.
///
/// An empty body counts as one line, and a trailing newline adds an empty
/// last line.
pub fn count_lines(body: &str) -> usize {
    body.split('\n').count()
}

/// Checks the body returned by a single GET to `https://<host>`.
///
/// Redirects are not followed. An empty body is CRITICAL, a body matching
/// `expected` is OK and anything else is UNKNOWN. The verbose trace reports
/// the number of lines returned.
pub async fn check_content(
    target: &Target,
    expected: &str,
    user_agent: &str,
    timeout: Duration,
) -> CheckResult {
    check_content_at(&target.url(), expected, user_agent, timeout).await
}

/// Same as [`check_content`], against an arbitrary URL.
pub async fn check_content_at(
    url: &str,
    expected: &str,
    user_agent: &str,
    timeout: Duration,
) -> CheckResult {
    match fetch_body(url, user_agent, timeout).await {
        Ok(body) => evaluate_content(&body, expected),
        Err(e) => CheckResult::failed(e),
    }
}

async fn fetch_body(url: &str, user_agent: &str, timeout: Duration) -> Result<String, CheckError> {
    let client = init_client(user_agent, timeout)?;
    let resp = client.get(url).send().await?;
    debug!("Content request to {url} returned {}", resp.status());
    let bytes = resp.bytes().await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Evaluates a fetched body against the expected content.
pub fn evaluate_content(body: &str, expected: &str) -> CheckResult {
    let result = if body.is_empty() {
        CheckResult::evaluated(ServiceState::Critical, None, "No content returned")
    } else if content_matches(body, expected) {
        CheckResult::evaluated(
            ServiceState::Ok,
            None,
            format!("Expected content returned: {expected}"),
        )
    } else {
        CheckResult::evaluated(ServiceState::Unknown, None, "Unknown content returned")
    };

    result.with_verbose(format!("Returned {} lines of content.\n", count_lines(body)))
}
