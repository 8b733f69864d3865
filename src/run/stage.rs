//! Pipeline stages and how each one is reported.

use std::fmt;

use crate::check::{AcceptedStatusSet, Evaluation};

/// One step of the pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// HTTP status after redirects
    Status,
    /// Body of a single GET
    Content,
    /// TLS certificate expiry
    Certificate,
}

impl Stage {
    /// All stages in the order they run.
    pub const ALL: [Stage; 3] = [Stage::Status, Stage::Content, Stage::Certificate];

    /// Banner printed on the intro line when this stage stops the pipeline.
    pub fn banner(self) -> &'static str {
        match self {
            Stage::Status => "Status Code Error",
            Stage::Content => "Web Content Error",
            Stage::Certificate => "TLS Certificate Error",
        }
    }

    /// Performance-data key for this stage's elapsed time.
    pub fn perf_key(self) -> &'static str {
        match self {
            Stage::Status => "status_took",
            Stage::Content => "content_took",
            Stage::Certificate => "cert_took",
        }
    }

    /// Summary line for a completed evaluation of this stage.
    pub fn summary(self, evaluation: &Evaluation, accepted: &AcceptedStatusSet) -> String {
        match self {
            Stage::Status => format!(
                "Status Code: {} {}, expected one of: {accepted}",
                evaluation
                    .status
                    .map(|code| code.to_string())
                    .unwrap_or_default(),
                evaluation.value
            ),
            Stage::Content => format!("Content Check: {}", evaluation.value),
            Stage::Certificate => format!("Cert Check: {}", evaluation.value),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Status => "status",
            Stage::Content => "content",
            Stage::Certificate => "certificate",
        };
        f.write_str(name)
    }
}
