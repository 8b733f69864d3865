//! Configuration constants.
//!
//! Defaults for every command-line flag plus the patterns used to validate input
//! and to resolve redirect targets.

/// Default string the response body is checked against
pub const DEFAULT_EXPECTED_CONTENT: &str = "<!DOCTYPE HTML>";

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `-u` flag.
pub const DEFAULT_USER_AGENT: &str = "check_https";

/// Default number of requests issued while following redirects
pub const DEFAULT_MAX_REDIRECTS: usize = 20;

/// Days of remaining certificate validity below which a warning is returned
pub const DEFAULT_CERT_WARN_DAYS: i64 = 10;
/// Days of remaining certificate validity below which a critical state is returned
pub const DEFAULT_CERT_CRIT_DAYS: i64 = 5;

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Status codes treated as good when `-a` is not given: the 2xx success family.
pub const DEFAULT_ACCEPTED_STATUS_CODES: &[u16] =
    &[200, 201, 202, 203, 204, 205, 206, 207, 208, 226];

/// Same list in the form accepted by `-a`, used as the clap default value
pub const DEFAULT_ACCEPTED_STATUS_CODES_ARG: &str = "200,201,202,203,204,205,206,207,208,226";

// Input validation
/// Shape of a valid `-a` value: digits, optionally separated by single commas
pub const STATUS_CODE_LIST_PATTERN: &str = r"^\d+(,\d+)*$";
/// Smallest value accepted as an HTTP status code
pub const MIN_STATUS_CODE: u16 = 100;
/// Largest value accepted as an HTTP status code
pub const MAX_STATUS_CODE: u16 = 999;
/// Longest host name accepted (DNS limit)
pub const MAX_HOST_LENGTH: usize = 253;

// Redirect resolution
/// A `Location` value matching this is already absolute and used verbatim
pub const URL_SCHEME_PATTERN: &str = r"^https?://";
/// Extracts scheme+host (and port, if any) from the current URL for root-relative
/// redirects. Deliberately narrow: lowercase hosts, digits, dots and dashes only.
pub const URL_SCHEME_HOST_PATTERN: &str = r"https?://[-0-9a-z.]+(:[0-9]+)?";

// Certificate stage
/// Port the certificate stage connects to
pub const HTTPS_PORT: u16 = 443;
/// Layout used when printing the certificate's expiry, e.g. "January 02, 2006 15:04"
pub const CERT_EXPIRY_FORMAT: &str = "%B %d, %Y %H:%M";

/// Printed before exiting with UNKNOWN when no host was given
pub const MISSING_HOST_MESSAGE: &str = "Please provide a fully-qualified domain name.";
/// Printed before exiting with UNKNOWN when `-a` is malformed
pub const INVALID_STATUS_CODES_MESSAGE: &str =
    "Status Codes must be provided as a comma-separated string. Eg: 200,201,202";
