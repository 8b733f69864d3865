//! check_https library: HTTPS health checks for monitoring supervisors
//!
//! This library checks one HTTPS endpoint in three stages, in order:
//! the HTTP status code after following redirects, the content of the page,
//! and the remaining validity of the TLS certificate. The first stage that
//! does not pass decides the result, reported in the Nagios/Icinga plugin
//! convention (exit code 0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN).
//!
//! # Example
//!
//! ```no_run
//! use check_https::{run_pipeline, CheckConfig, Target};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CheckConfig {
//!     max_redirects: 5,
//!     verbose: true,
//!     ..CheckConfig::new(Target::new("example.com")?)
//! };
//!
//! let report = run_pipeline(&config).await;
//! print!("{}", report.render());
//! println!("exit code: {}", report.exit_code());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime, and
//! [`initialization::init_crypto_provider`] must be called before the
//! certificate stage runs.

#![warn(missing_docs)]

pub mod check;
pub mod config;
pub mod error_handling;
mod fetch;
pub mod initialization;
mod run;
mod tls;
mod utils;

// Re-export public API
pub use check::{AcceptedStatusSet, CheckResult, Evaluation, ServiceState, Target};
pub use config::{CheckConfig, LogFormat, LogLevel, Opt};
pub use error_handling::{CheckError, InitializationError};
pub use fetch::{
    follow_redirects, is_followed_redirect, resolve_location, FinalResponse, RedirectTrace,
};
pub use run::{
    run_pipeline, run_stages, LiveStages, PipelineReport, Stage, StageReport, StageRunner,
};
pub use tls::{cipher_suite_name, protocol_version_name, TlsSession};
pub use utils::PerfData;
