//! Performance data for the plugin output line.
//!
//! Monitoring supervisors read the text after `|` as space-separated
//! `key=value` metrics. The total run time is always the last metric.

use std::fmt::Display;
use std::time::{Duration, Instant};

/// Ordered performance metrics plus the instant the run started.
///
/// Owned by the caller of the pipeline; there is no global timer.
#[derive(Debug, Clone)]
pub struct PerfData {
    start: Instant,
    metrics: Vec<(String, String)>,
}

impl PerfData {
    /// Starts collecting, measuring total time from `start`.
    pub fn new(start: Instant) -> Self {
        Self {
            start,
            metrics: Vec::new(),
        }
    }

    /// Appends a metric. Keys are kept in insertion order.
    pub fn record(&mut self, key: impl Into<String>, value: impl Display) {
        self.metrics.push((key.into(), value.to_string()));
    }

    /// Appends a duration metric rendered in whole milliseconds.
    pub fn record_duration(&mut self, key: impl Into<String>, elapsed: Duration) {
        self.record(key, format!("{}ms", elapsed.as_millis()));
    }

    /// Recorded metrics, in order.
    pub fn metrics(&self) -> &[(String, String)] {
        &self.metrics
    }

    /// Renders the line with `checks_took` measured up to now.
    pub fn render(&self) -> String {
        self.render_at(Instant::now())
    }

    /// Renders the line with `checks_took` measured up to `now`.
    pub fn render_at(&self, now: Instant) -> String {
        let total = now.saturating_duration_since(self.start).as_millis();
        let mut line = String::from("|");
        for (key, value) in &self.metrics {
            line.push_str(key);
            line.push('=');
            line.push_str(value);
            line.push(' ');
        }
        line.push_str(&format!("checks_took={total}ms"));
        line
    }
}
