//! Redirect target resolution.
//!
//! Computes the next URL from the current one and a `Location` header value.
//! This is intentionally minimal and not RFC 3986 reference resolution: path-relative
//! values are appended verbatim, with no collapsing of `//`, `.` or `..` segments.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{URL_SCHEME_HOST_PATTERN, URL_SCHEME_PATTERN};
use crate::error_handling::CheckError;

static URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_SCHEME_PATTERN).expect("scheme pattern is a valid regex"));

static URL_SCHEME_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(URL_SCHEME_HOST_PATTERN).expect("scheme+host pattern is a valid regex")
});

/// Resolves a `Location` header value against the URL that produced it.
///
/// - Absolute (`http://` or `https://`): used verbatim.
/// - Root-relative (starts with `/`): scheme+host[:port] of `current` followed by `location`.
/// - Anything else: `current` + `/` + `location`.
///
/// # Arguments
///
/// * `current` - URL of the response that redirected
/// * `location` - Raw `Location` header value
///
/// # Errors
///
/// Returns `CheckError::InvalidRedirectTarget` when `location` is root-relative but
/// no scheme+host can be found in `current`.
pub fn resolve_location(current: &str, location: &str) -> Result<String, CheckError> {
    if URL_SCHEME.is_match(location) {
        return Ok(location.to_string());
    }

    if location.starts_with('/') {
        return match URL_SCHEME_HOST.find(current) {
            Some(origin) => Ok(format!("{}{}", origin.as_str(), location)),
            None => Err(CheckError::InvalidRedirectTarget(current.to_string())),
        };
    }

    Ok(format!("{current}/{location}"))
}
