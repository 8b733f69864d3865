//! Pipeline orchestration.
//!
//! Runs the status, content and certificate stages strictly in sequence and
//! stops at the first stage that does not pass. Nothing is spawned; each stage
//! is awaited before the next one starts.

mod report;
mod stage;

use std::time::Instant;

use log::{info, warn};

use crate::check::{check_certificate, check_content, check_status, CheckResult};
use crate::config::CheckConfig;
use crate::error_handling::categorize_check_error;
use crate::utils::PerfData;

pub use report::{PipelineReport, StageReport};
pub use stage::Stage;

/// Runs one stage against a configuration.
///
/// [`LiveStages`] performs the real network checks; tests substitute canned
/// results to drive the pipeline without a network.
#[allow(async_fn_in_trait)]
pub trait StageRunner {
    /// Runs `stage` and returns its result.
    async fn run(&self, stage: Stage, config: &CheckConfig) -> CheckResult;
}

/// The real checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveStages;

impl StageRunner for LiveStages {
    async fn run(&self, stage: Stage, config: &CheckConfig) -> CheckResult {
        match stage {
            Stage::Status => {
                check_status(
                    &config.target,
                    config.max_redirects,
                    &config.user_agent,
                    config.timeout,
                    &config.accepted_codes,
                )
                .await
            }
            Stage::Content => {
                check_content(
                    &config.target,
                    &config.expected_content,
                    &config.user_agent,
                    config.timeout,
                )
                .await
            }
            Stage::Certificate => {
                check_certificate(
                    &config.target,
                    config.cert_warn_days,
                    config.cert_crit_days,
                    config.timeout,
                )
                .await
            }
        }
    }
}

/// Runs the three live stages against `config`.
///
/// # Examples
///
/// ```no_run
/// use check_https::{run_pipeline, CheckConfig, Target};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CheckConfig::new(Target::new("example.com")?);
/// let report = run_pipeline(&config).await;
/// print!("{}", report.render());
/// std::process::exit(report.exit_code());
/// # }
/// ```
pub async fn run_pipeline(config: &CheckConfig) -> PipelineReport {
    run_stages(config, &LiveStages, Instant::now()).await
}

/// Runs every stage through `runner`, stopping at the first that does not pass.
///
/// `start` is the instant the total `checks_took` time is measured from.
pub async fn run_stages<R: StageRunner>(
    config: &CheckConfig,
    runner: &R,
    start: Instant,
) -> PipelineReport {
    let mut perf = PerfData::new(start);
    let mut stages = Vec::with_capacity(Stage::ALL.len());
    let mut failed_stage = None;

    for stage in Stage::ALL {
        let stage_start = Instant::now();
        let result = runner.run(stage, config).await;
        let elapsed = stage_start.elapsed();
        perf.record_duration(stage.perf_key(), elapsed);

        match &result.outcome {
            Ok(evaluation) => info!(
                "{stage} check for {}: {} ({}) in {}ms",
                config.target,
                evaluation.state,
                evaluation.value,
                elapsed.as_millis()
            ),
            Err(e) => warn!(
                "{stage} check for {} failed with {}: {e}",
                config.target,
                categorize_check_error(e)
            ),
        }

        let passed = result.passed();
        stages.push(StageReport {
            stage,
            result,
            elapsed,
        });
        if !passed {
            failed_stage = Some(stage);
            break;
        }
    }

    PipelineReport {
        target_url: config.target.url(),
        accepted_codes: config.accepted_codes.clone(),
        verbose: config.verbose,
        stages,
        failed_stage,
        perf,
    }
}
