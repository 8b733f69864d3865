//! HTTP redirect chain resolution.
//!
//! This module follows redirect chains manually so every hop is observed and
//! recorded, instead of letting the HTTP client follow them silently.

use reqwest::StatusCode;

use crate::error_handling::CheckError;
use crate::fetch::url::resolve_location;

/// Status codes whose `Location` header is followed.
const FOLLOWED_REDIRECTS: [StatusCode; 3] = [
    StatusCode::MOVED_PERMANENTLY,
    StatusCode::FOUND,
    StatusCode::TEMPORARY_REDIRECT,
];

/// Append-only log of the redirects seen while resolving a chain.
///
/// Purely diagnostic; nothing reads it to make decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectTrace {
    lines: Vec<String>,
}

impl RedirectTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one hop as `<url> redirected (<status>) to <location>`.
    pub fn record(&mut self, url: &str, status: StatusCode, location: &str) {
        self.lines
            .push(format!("{url} redirected ({status}) to {location}\n"));
    }

    /// Number of recorded hops.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no hop was recorded.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The trace as newline-terminated text.
    pub fn as_text(&self) -> String {
        self.lines.concat()
    }
}

/// The response that ended redirect resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalResponse {
    /// URL of the last request issued
    pub url: String,
    /// Status of the last response; may itself be a redirect if the budget ran out
    pub status: StatusCode,
    /// Number of requests issued
    pub requests: usize,
}

/// Whether `status` is one of the redirect codes that is followed.
pub fn is_followed_redirect(status: StatusCode) -> bool {
    FOLLOWED_REDIRECTS.contains(&status)
}

/// Follows the redirect chain starting at `start_url`.
///
/// Issues at most `max_redirects` requests. A 301, 302 or 307 response with a
/// `Location` header is followed; any other status ends the chain. Running out
/// of budget is not an error: the last response seen is returned as-is, even
/// when it is itself a redirect.
///
/// # Arguments
///
/// * `start_url` - The initial URL to start from
/// * `max_redirects` - Maximum number of requests to issue
/// * `client` - HTTP client with redirects disabled (for manual tracking)
/// * `trace` - Receives one line per followed redirect, kept even when an error is returned
///
/// # Errors
///
/// Returns an error if `max_redirects` is zero, if a request fails, or if a
/// redirect target cannot be resolved.
pub async fn follow_redirects(
    start_url: &str,
    max_redirects: usize,
    client: &reqwest::Client,
    trace: &mut RedirectTrace,
) -> Result<FinalResponse, CheckError> {
    if max_redirects == 0 {
        return Err(CheckError::NoRedirectBudget);
    }

    let mut current = start_url.to_string();
    let mut last: Option<FinalResponse> = None;

    for hop in 0..max_redirects {
        log::debug!("Requesting {current} (request {} of at most {max_redirects})", hop + 1);
        let resp = client.get(&current).send().await?;
        let status = resp.status();
        last = Some(FinalResponse {
            url: current.clone(),
            status,
            requests: hop + 1,
        });

        if !is_followed_redirect(status) {
            break;
        }

        let Some(location) = resp.headers().get(reqwest::header::LOCATION) else {
            // Redirect status but no Location header: nothing to follow, treat as final
            log::warn!("Redirect status {status} for {current} but no Location header");
            break;
        };
        let location = location
            .to_str()
            .map_err(|_| CheckError::InvalidLocationHeader(current.clone()))?;

        trace.record(&current, status, location);
        current = resolve_location(&current, location)?;
    }

    if let Some(ref final_response) = last {
        if is_followed_redirect(final_response.status) && final_response.requests == max_redirects
        {
            log::info!(
                "Redirect limit of {max_redirects} reached at {}; evaluating last response",
                final_response.url
            );
        }
    }

    // max_redirects > 0 guarantees at least one request was made
    last.ok_or(CheckError::NoRedirectBudget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    fn redirect_client() -> reqwest::Client {
        reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .expect("Failed to create redirect client")
    }

    #[test]
    fn test_followed_redirect_codes() {
        assert!(is_followed_redirect(StatusCode::MOVED_PERMANENTLY));
        assert!(is_followed_redirect(StatusCode::FOUND));
        assert!(is_followed_redirect(StatusCode::TEMPORARY_REDIRECT));
        assert!(!is_followed_redirect(StatusCode::SEE_OTHER));
        assert!(!is_followed_redirect(StatusCode::PERMANENT_REDIRECT));
        assert!(!is_followed_redirect(StatusCode::OK));
    }

    #[test]
    fn test_trace_line_format() {
        let mut trace = RedirectTrace::new();
        trace.record(
            "https://example.com",
            StatusCode::MOVED_PERMANENTLY,
            "https://www.example.com/",
        );
        assert_eq!(
            trace.as_text(),
            "https://example.com redirected (301 Moved Permanently) to https://www.example.com/\n"
        );
        assert_eq!(trace.len(), 1);
    }

    #[tokio::test]
    async fn test_direct_response_is_final() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/"))
                .times(1)
                .respond_with(status_code(200).body("hello")),
        );

        let start = server.url_str("/");
        let mut trace = RedirectTrace::new();
        let result = follow_redirects(&start, 20, &redirect_client(), &mut trace)
            .await
            .expect("request should succeed");

        assert_eq!(result.status, StatusCode::OK);
        assert_eq!(result.requests, 1);
        assert_eq!(result.url, start);
        assert!(trace.is_empty());
    }

    #[tokio::test]
    async fn test_root_relative_redirect_followed_once() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/"))
                .times(1)
                .respond_with(status_code(301).insert_header("Location", "/new")),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/new"))
                .times(1)
                .respond_with(status_code(200)),
        );

        let start = server.url_str("/");
        let mut trace = RedirectTrace::new();
        let result = follow_redirects(&start, 20, &redirect_client(), &mut trace)
            .await
            .expect("chain should resolve");

        assert_eq!(result.status, StatusCode::OK);
        assert_eq!(result.requests, 2);
        assert_eq!(result.url, server.url_str("/new"));
        assert_eq!(trace.len(), 1);
        assert!(trace.as_text().contains("redirected (301 Moved Permanently) to /new"));
    }

    #[tokio::test]
    async fn test_budget_exhausted_returns_last_redirect() {
        let server = Server::run();
        // Every request redirects to itself; with a budget of 3 exactly 3 requests are made
        server.expect(
            Expectation::matching(request::method_path("GET", "/loop"))
                .times(3)
                .respond_with(status_code(302).insert_header("Location", "/loop")),
        );

        let start = server.url_str("/loop");
        let mut trace = RedirectTrace::new();
        let result = follow_redirects(&start, 3, &redirect_client(), &mut trace)
            .await
            .expect("exhausting the budget is not an error");

        assert_eq!(result.status, StatusCode::FOUND);
        assert_eq!(result.requests, 3);
        assert_eq!(trace.len(), 3);
    }

    #[tokio::test]
    async fn test_see_other_is_not_followed() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/"))
                .times(1)
                .respond_with(status_code(303).insert_header("Location", "/elsewhere")),
        );

        let mut trace = RedirectTrace::new();
        let result = follow_redirects(&server.url_str("/"), 20, &redirect_client(), &mut trace)
            .await
            .unwrap();

        assert_eq!(result.status, StatusCode::SEE_OTHER);
        assert!(trace.is_empty());
    }

    #[tokio::test]
    async fn test_redirect_without_location_is_final() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/"))
                .times(1)
                .respond_with(status_code(307)),
        );

        let mut trace = RedirectTrace::new();
        let result = follow_redirects(&server.url_str("/"), 20, &redirect_client(), &mut trace)
            .await
            .unwrap();

        assert_eq!(result.status, StatusCode::TEMPORARY_REDIRECT);
        assert!(trace.is_empty());
    }

    #[tokio::test]
    async fn test_zero_budget_is_an_error() {
        let mut trace = RedirectTrace::new();
        let err = follow_redirects("http://127.0.0.1:9/", 0, &redirect_client(), &mut trace)
            .await
            .unwrap_err();
        assert!(matches!(err, CheckError::NoRedirectBudget));
    }

    #[tokio::test]
    async fn test_transport_error_is_an_error() {
        let mut trace = RedirectTrace::new();
        let err = follow_redirects("http://127.0.0.1:9/", 5, &redirect_client(), &mut trace)
            .await
            .unwrap_err();
        assert!(matches!(err, CheckError::Transport(_)));
    }

    #[tokio::test]
    async fn test_uppercase_scheme_is_path_relative() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/start"))
                .times(1)
                .respond_with(
                    status_code(302).insert_header("Location", "HTTP://UPPER.EXAMPLE/x"),
                ),
        );

        let mut trace = RedirectTrace::new();
        let result = follow_redirects(&server.url_str("/start"), 1, &redirect_client(), &mut trace)
            .await
            .unwrap();

        // Budget of 1: the appended target is resolved but never requested
        assert_eq!(result.status, StatusCode::FOUND);
        assert_eq!(result.url, server.url_str("/start"));
        assert_eq!(trace.len(), 1);
    }
}
