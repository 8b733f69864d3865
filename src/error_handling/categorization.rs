//! Error categorization and rendering.
//!
//! This module maps hard errors onto [`ErrorType`] labels for logging and renders
//! an error together with its source chain for operator-facing output.

use std::error::Error as StdError;

use super::types::{CheckError, ErrorType};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `ErrorType` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_status() {
        ErrorType::HttpRequestStatusError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Categorizes any hard error produced by a check.
pub fn categorize_check_error(error: &CheckError) -> ErrorType {
    match error {
        CheckError::Transport(e) => categorize_reqwest_error(e),
        CheckError::ClientSetup(_) => ErrorType::HttpRequestBuilderError,
        CheckError::InvalidRedirectTarget(_) | CheckError::InvalidLocationHeader(_) => {
            ErrorType::RedirectTargetError
        }
        CheckError::Connect { .. } => ErrorType::TlsConnectError,
        CheckError::Timeout { .. } => ErrorType::TlsHandshakeTimeout,
        CheckError::Tls { .. }
        | CheckError::NoCertificates
        | CheckError::CertificateParse(_) => ErrorType::TlsCertificateError,
        CheckError::NoRedirectBudget
        | CheckError::InvalidHost { .. }
        | CheckError::InvalidStatusCodes(_) => ErrorType::InputError,
    }
}

/// Renders an error followed by each of its sources, joined with `": "`.
///
/// reqwest only puts the URL in its own `Display`; the actual cause (DNS failure,
/// certificate rejection, refused connection) is further down the chain.
/// Sources whose text is already contained in the rendered output are skipped so
/// wrappers that embed their source (`#[error("...: {0}")]`) don't repeat it.
pub fn render_error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut rendered = error.to_string();
    let mut current = error.source();
    while let Some(source) = current {
        let text = source.to_string();
        if !text.is_empty() && !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        current = source.source();
    }
    rendered
}
