//! Configuration types and CLI options.
//!
//! This module defines the `clap` options struct, the logging enums, and the
//! validated library-side configuration built from them.

use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};

use crate::check::{AcceptedStatusSet, Target};
use crate::config::constants::*;
use crate::error_handling::CheckError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// Short flags follow the usual monitoring-plugin layout, which means `-h` is the
/// host and help is only available as `--help`. Logs go to stderr; stdout is
/// reserved for the check report.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// check_https -h example.com
///
/// # Verbose, custom content and thresholds
/// check_https -h example.com -v -s "<html" -w 21 -c 7
///
/// # Only accept 200 and 204
/// check_https -h example.com -a 200,204
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "check_https",
    about = "Checks an HTTPS endpoint's status code, content and TLS certificate.",
    disable_help_flag = true
)]
pub struct Opt {
    /// Fully-qualified domain name to check
    #[arg(short = 'h', long)]
    pub host: Option<String>,

    /// Custom string to check for in the response body
    #[arg(short = 's', long, default_value = DEFAULT_EXPECTED_CONTENT)]
    pub expected_content: String,

    /// Custom User-Agent string
    #[arg(short = 'u', long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// More verbose output, includes details of any redirects
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Number of redirects to follow
    #[arg(short = 'r', long, default_value_t = DEFAULT_MAX_REDIRECTS)]
    pub redirects: usize,

    /// Number of days the TLS certificate must remain valid before a warning state is returned
    #[arg(short = 'w', long, default_value_t = DEFAULT_CERT_WARN_DAYS)]
    pub cert_warn_days: i64,

    /// Number of days the TLS certificate must remain valid before a critical state is returned
    #[arg(short = 'c', long, default_value_t = DEFAULT_CERT_CRIT_DAYS)]
    pub cert_crit_days: i64,

    /// Timeout in seconds; requests that do not finish in time are considered failed
    #[arg(short = 't', long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Comma-separated list of accepted status codes
    #[arg(short = 'a', long, default_value = DEFAULT_ACCEPTED_STATUS_CODES_ARG)]
    pub accepted_codes: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

/// Library configuration (no CLI dependencies).
///
/// Holds already-validated values; construct it with [`CheckConfig::new`] and
/// override fields with struct update syntax, or build it from [`Opt`].
///
/// # Examples
///
/// ```
/// use check_https::{CheckConfig, Target};
///
/// let target = Target::new("example.com").unwrap();
/// let config = CheckConfig {
///     verbose: true,
///     max_redirects: 5,
///     ..CheckConfig::new(target)
/// };
/// assert_eq!(config.cert_warn_days, 10);
/// ```
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Host being checked
    pub target: Target,
    /// String the response body is checked against
    pub expected_content: String,
    /// HTTP User-Agent header value
    pub user_agent: String,
    /// Print the accumulated trace after the summary lines
    pub verbose: bool,
    /// Maximum number of requests issued while following redirects
    pub max_redirects: usize,
    /// Warning threshold in days of remaining certificate validity
    pub cert_warn_days: i64,
    /// Critical threshold in days of remaining certificate validity
    pub cert_crit_days: i64,
    /// Per-request timeout, applied to all three stages
    pub timeout: Duration,
    /// Status codes treated as good
    pub accepted_codes: AcceptedStatusSet,
}

impl CheckConfig {
    /// Creates a configuration for `target` with every other value at its default.
    pub fn new(target: Target) -> Self {
        Self {
            target,
            expected_content: DEFAULT_EXPECTED_CONTENT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            verbose: false,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            cert_warn_days: DEFAULT_CERT_WARN_DAYS,
            cert_crit_days: DEFAULT_CERT_CRIT_DAYS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            accepted_codes: AcceptedStatusSet::default(),
        }
    }

    /// Validates command-line options.
    ///
    /// The host is checked first, then the accepted status codes; no network
    /// activity happens here.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidHost` for a missing or malformed host and
    /// `CheckError::InvalidStatusCodes` for a malformed `-a` value.
    pub fn from_opt(opt: &Opt) -> Result<Self, CheckError> {
        let target = Target::new(opt.host.as_deref().unwrap_or(""))?;
        let accepted_codes: AcceptedStatusSet = opt.accepted_codes.parse()?;

        Ok(Self {
            target,
            expected_content: opt.expected_content.clone(),
            user_agent: opt.user_agent.clone(),
            verbose: opt.verbose,
            max_redirects: opt.redirects,
            cert_warn_days: opt.cert_warn_days,
            cert_crit_days: opt.cert_crit_days,
            timeout: Duration::from_secs(opt.timeout),
            accepted_codes,
        })
    }
}

/// Returns the message printed before exiting with UNKNOWN on invalid input.
pub fn input_error_message(error: &CheckError) -> String {
    match error {
        CheckError::InvalidHost { host, .. } if host.trim().is_empty() => {
            MISSING_HOST_MESSAGE.to_string()
        }
        CheckError::InvalidStatusCodes(_) => INVALID_STATUS_CODES_MESSAGE.to_string(),
        other => other.to_string(),
    }
}
