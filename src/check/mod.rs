//! The three check stages and their shared types.
//!
//! - [`check_status`]: HTTP status after following redirects
//! - [`check_content`]: body of a single GET
//! - [`check_certificate`]: expiry of the served TLS certificate
//!
//! Each stage builds its own client and returns a [`CheckResult`]. Stages
//! never return `Err`: hard errors travel inside the result so the trace
//! gathered before the failure is not lost.

mod certificate;
mod content;
mod result;
mod status;
mod status_codes;
mod target;

pub use certificate::{check_certificate, check_certificate_at, evaluate_expiry, format_expiry};
pub use content::{check_content, check_content_at, content_matches, count_lines, evaluate_content};
pub use result::{CheckResult, Evaluation, ServiceState};
pub use status::{check_status, check_status_at, status_code_good};
pub use status_codes::AcceptedStatusSet;
pub use target::Target;
