//! HTTP status stage.

use std::time::Duration;

use log::debug;

use crate::check::{AcceptedStatusSet, CheckResult, ServiceState, Target};
use crate::fetch::{follow_redirects, RedirectTrace};
use crate::initialization::init_client;

/// Whether `status` is one of the accepted codes.
pub fn status_code_good(status: u16, accepted: &AcceptedStatusSet) -> bool {
    accepted.contains(status)
}

/// Checks the HTTP status of `https://<host>` after following redirects.
///
/// Follows up to `max_redirects` 301/302/307 responses and evaluates the last
/// response: OK when its code is accepted, CRITICAL otherwise. The evaluation
/// carries the numeric code and its reason phrase; the verbose trace lists
/// every redirect followed.
pub async fn check_status(
    target: &Target,
    max_redirects: usize,
    user_agent: &str,
    timeout: Duration,
    accepted: &AcceptedStatusSet,
) -> CheckResult {
    check_status_at(&target.url(), max_redirects, user_agent, timeout, accepted).await
}

/// Same as [`check_status`], starting from an arbitrary URL.
pub async fn check_status_at(
    start_url: &str,
    max_redirects: usize,
    user_agent: &str,
    timeout: Duration,
    accepted: &AcceptedStatusSet,
) -> CheckResult {
    let client = match init_client(user_agent, timeout) {
        Ok(client) => client,
        Err(e) => return CheckResult::failed(e.into()),
    };

    let mut trace = RedirectTrace::new();
    let final_response = match follow_redirects(start_url, max_redirects, &client, &mut trace).await
    {
        Ok(final_response) => final_response,
        Err(e) => return CheckResult::failed(e).with_verbose(trace.as_text()),
    };

    let code = final_response.status.as_u16();
    let reason = final_response.status.canonical_reason().unwrap_or_default();
    let state = if status_code_good(code, accepted) {
        ServiceState::Ok
    } else {
        ServiceState::Critical
    };
    debug!(
        "Status check for {start_url}: {code} {reason} after {} request(s), {state}",
        final_response.requests
    );

    CheckResult::evaluated(state, Some(code), reason).with_verbose(trace.as_text())
}
