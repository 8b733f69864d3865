//! The host under check.

use std::fmt;

use crate::config::MAX_HOST_LENGTH;
use crate::error_handling::CheckError;

/// Host name to check, without a scheme.
///
/// Validated once when constructed and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    host: String,
}

impl Target {
    /// Validates `host` and wraps it.
    ///
    /// Leading and trailing whitespace is trimmed. The host must be non-empty,
    /// must not carry a scheme, and `https://<host>` must parse as a URL.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidHost` describing why the host was rejected.
    pub fn new(host: &str) -> Result<Self, CheckError> {
        let trimmed = host.trim();
        let reject = |reason: &str| CheckError::InvalidHost {
            host: host.to_string(),
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(reject("host is empty"));
        }
        if trimmed.len() > MAX_HOST_LENGTH {
            return Err(reject("host is too long"));
        }
        if trimmed.contains("://") {
            return Err(reject("host must not include a scheme"));
        }

        match url::Url::parse(&format!("https://{trimmed}")) {
            Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => Ok(Self {
                host: trimmed.to_string(),
            }),
            Ok(_) => Err(reject("host has no domain name")),
            Err(e) => Err(reject(&e.to_string())),
        }
    }

    /// The host as given (trimmed).
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The URL every stage starts from: `https://<host>`.
    pub fn url(&self) -> String {
        format!("https://{}", self.host)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.host)
    }
}
