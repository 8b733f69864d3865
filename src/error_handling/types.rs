//! Error type definitions.
//!
//! This module defines the hard-error types produced by the checks and by
//! application start-up, plus the transport error categories used in logs.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Hard errors raised while checking a target.
///
/// Any of these maps to exit code 3 (UNKNOWN). Soft failures (bad status code,
/// wrong content, expiring certificate) are not errors and are reported through
/// [`crate::check::Evaluation`] instead.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The HTTP request could not be completed (connect, TLS, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// A root-relative redirect was received but the current URL had no scheme+host.
    #[error("check http status: could not parse a valid URL from {0}")]
    InvalidRedirectTarget(String),

    /// The `Location` header was not valid visible ASCII.
    #[error("check http status: unreadable Location header on {0}")]
    InvalidLocationHeader(String),

    /// A redirect budget of zero would never issue a request.
    #[error("check http status: redirect limit must be at least 1")]
    NoRedirectBudget,

    /// TCP connection to the TLS port failed.
    #[error("TLS error: failed to connect to {host}:{port}: {source}")]
    Connect {
        /// Host that refused or could not be reached
        host: String,
        /// Port dialled, 443 unless the host carries one
        port: u16,
        /// Underlying socket error
        #[source]
        source: std::io::Error,
    },

    /// A network step did not finish within the configured timeout.
    #[error("TLS error: {step} timed out for {host} after {seconds}s")]
    Timeout {
        /// Step that timed out ("TCP connect" or "TLS handshake")
        step: &'static str,
        /// Target host
        host: String,
        /// Configured timeout in seconds
        seconds: u64,
    },

    /// The TLS handshake or the request write failed.
    #[error("TLS error: connection to {host} failed: {source}")]
    Tls {
        /// Target host
        host: String,
        /// Underlying I/O error carrying the rustls failure
        #[source]
        source: std::io::Error,
    },

    /// The server completed a handshake without presenting a certificate.
    #[error("TLS error: no certificates returned")]
    NoCertificates,

    /// The leaf certificate could not be decoded.
    #[error("TLS error: could not parse certificate: {0}")]
    CertificateParse(String),

    /// The host is empty, carries a scheme, or is not a valid authority.
    #[error("invalid host {host:?}: {reason}")]
    InvalidHost {
        /// Host as supplied
        host: String,
        /// Why it was rejected
        reason: String,
    },

    /// The stage's HTTP client could not be built.
    #[error("{0}")]
    ClientSetup(#[from] InitializationError),

    /// The accepted status code list is not a comma-separated list of codes.
    #[error("invalid status code list {0:?}")]
    InvalidStatusCodes(String),
}

/// Categories of transport failures, used for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Request could not be built
    HttpRequestBuilderError,
    /// Redirect policy error
    HttpRequestRedirectError,
    /// Error status raised by the client
    HttpRequestStatusError,
    /// Request timed out
    HttpRequestTimeoutError,
    /// Request could not be sent
    HttpRequestRequestError,
    /// Connection failed
    HttpRequestConnectError,
    /// Body could not be read
    HttpRequestBodyError,
    /// Body could not be decoded
    HttpRequestDecodeError,
    /// Any other transport failure
    HttpRequestOtherError,
    /// TCP connect for the certificate stage failed
    TlsConnectError,
    /// Connect or handshake timed out
    TlsHandshakeTimeout,
    /// Handshake or certificate failure
    TlsCertificateError,
    /// Redirect target could not be resolved
    RedirectTargetError,
    /// Invalid user input
    InputError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::TlsConnectError => "TLS connect error",
            ErrorType::TlsHandshakeTimeout => "TLS timeout",
            ErrorType::TlsCertificateError => "TLS certificate error",
            ErrorType::RedirectTargetError => "Redirect target error",
            ErrorType::InputError => "Input error",
        }
    }
}
