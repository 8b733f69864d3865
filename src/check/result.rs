//! Per-stage check results.

use std::fmt;

use crate::error_handling::CheckError;

/// Service state in the Nagios/Icinga plugin convention.
///
/// The discriminant is the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ServiceState {
    /// Check passed
    Ok = 0,
    /// Check passed a soft threshold
    Warning = 1,
    /// Check failed
    Critical = 2,
    /// State could not be determined
    Unknown = 3,
}

impl ServiceState {
    /// Exit code reported to the supervisor.
    pub fn exit_code(self) -> i32 {
        self as i32
    }

    /// Whether this state lets the pipeline continue to the next stage.
    pub fn is_ok(self) -> bool {
        self == ServiceState::Ok
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceState::Ok => "OK",
            ServiceState::Warning => "WARNING",
            ServiceState::Critical => "CRITICAL",
            ServiceState::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// Outcome of a stage that completed without a hard error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Service state, possibly a soft failure
    pub state: ServiceState,
    /// HTTP status code, set by the status stage only
    pub status: Option<u16>,
    /// Short human-readable summary
    pub value: String,
}

/// Result of one stage.
///
/// `outcome` holds either an evaluation or a hard error, never both. The
/// verbose trace is kept in both cases so the operator still sees what
/// happened before the failure.
#[derive(Debug)]
pub struct CheckResult {
    /// Evaluation, or the hard error that stopped the stage
    pub outcome: Result<Evaluation, CheckError>,
    /// Accumulated diagnostic text, printed only in verbose mode
    pub verbose: String,
}

impl CheckResult {
    /// A completed evaluation.
    pub fn evaluated(state: ServiceState, status: Option<u16>, value: impl Into<String>) -> Self {
        Self {
            outcome: Ok(Evaluation {
                state,
                status,
                value: value.into(),
            }),
            verbose: String::new(),
        }
    }

    /// A hard error.
    pub fn failed(error: CheckError) -> Self {
        Self {
            outcome: Err(error),
            verbose: String::new(),
        }
    }

    /// Attaches the verbose trace.
    pub fn with_verbose(mut self, verbose: impl Into<String>) -> Self {
        self.verbose = verbose.into();
        self
    }

    /// State that decides the exit code: a hard error is always UNKNOWN.
    pub fn state(&self) -> ServiceState {
        match &self.outcome {
            Ok(evaluation) => evaluation.state,
            Err(_) => ServiceState::Unknown,
        }
    }

    /// Whether the pipeline may continue past this stage.
    pub fn passed(&self) -> bool {
        matches!(&self.outcome, Ok(evaluation) if evaluation.state.is_ok())
    }
}
