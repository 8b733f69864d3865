//! The pipeline report and its plugin-format rendering.

use std::time::{Duration, Instant};

use crate::check::{AcceptedStatusSet, CheckResult, ServiceState};
use crate::error_handling::render_error_chain;
use crate::utils::PerfData;

use super::Stage;

/// Result of one stage that was reached.
#[derive(Debug)]
pub struct StageReport {
    /// Which stage ran
    pub stage: Stage,
    /// What it produced
    pub result: CheckResult,
    /// Wall-clock time spent in the stage
    pub elapsed: Duration,
}

/// Everything needed to print the plugin output and pick the exit code.
#[derive(Debug)]
pub struct PipelineReport {
    /// `https://<host>`
    pub target_url: String,
    /// Accepted status codes, echoed on the status summary line
    pub accepted_codes: AcceptedStatusSet,
    /// Whether the accumulated trace is printed
    pub verbose: bool,
    /// Stages that ran, in order
    pub stages: Vec<StageReport>,
    /// Stage that stopped the pipeline, if any
    pub failed_stage: Option<Stage>,
    /// Per-stage timings and the run start
    pub perf: PerfData,
}

impl PipelineReport {
    /// State of the stage that stopped the pipeline, or OK when all passed.
    pub fn state(&self) -> ServiceState {
        self.failed_result()
            .map(CheckResult::state)
            .unwrap_or(ServiceState::Ok)
    }

    /// Process exit code.
    pub fn exit_code(&self) -> i32 {
        self.state().exit_code()
    }

    fn failed_result(&self) -> Option<&CheckResult> {
        let failed = self.failed_stage?;
        self.stages
            .iter()
            .find(|report| report.stage == failed)
            .map(|report| &report.result)
    }

    /// Verbose traces of every stage reached, concatenated in order.
    pub fn trace(&self) -> String {
        self.stages
            .iter()
            .map(|report| report.result.verbose.as_str())
            .collect()
    }

    /// Renders the stdout text, measuring total time up to now.
    pub fn render(&self) -> String {
        self.render_at(Instant::now())
    }

    /// Renders the stdout text, measuring total time up to `now`.
    ///
    /// Every line, including the last, ends with `\n`.
    pub fn render_at(&self, now: Instant) -> String {
        let mut lines = Vec::new();

        let banner = self.failed_stage.map(Stage::banner).unwrap_or("OK");
        lines.push(format!("{banner} — HTTPS Check for {}", self.target_url));

        for report in &self.stages {
            if self.failed_stage.is_some_and(|failed| failed != report.stage) {
                continue;
            }
            match &report.result.outcome {
                Ok(evaluation) => {
                    lines.push(report.stage.summary(evaluation, &self.accepted_codes))
                }
                Err(error) => lines.push(render_error_chain(error)),
            }
        }

        if self.verbose {
            let trace = self.trace();
            if !trace.is_empty() {
                lines.push(format!("\nAdditional info:\n{trace}"));
            }
        }

        lines.push(self.perf.render_at(now));

        let mut rendered = lines.join("\n");
        rendered.push('\n');
        rendered
    }
}
