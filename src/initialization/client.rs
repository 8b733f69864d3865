//! HTTP client initialization.
//!
//! Every stage builds its own client; nothing is pooled across stages.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Initializes an HTTP client that does not follow redirects.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - A per-request timeout
/// - Redirect following disabled, so each hop can be observed
/// - Rustls TLS backend (no native TLS)
///
/// # Arguments
///
/// * `user_agent` - Value sent in the `User-Agent` header
/// * `timeout` - Requests exceeding this are aborted
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(
    user_agent: &str,
    timeout: Duration,
) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(timeout)
        .user_agent(user_agent)
        .use_rustls_tls()
        .build()?;
    Ok(client)
}
