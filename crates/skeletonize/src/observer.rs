use std::time::Duration;

use log::{debug, error, info};
use sk_thin::ThinningReport;

use crate::{PipelineError, Stage};

/// Telemetry capability handed to [`crate::Skeletonizer::run`]. All hooks
/// default to no-ops.
pub trait PipelineObserver: Sync {
    fn stage_completed(&self, _stage: Stage, _width: usize, _height: usize, _elapsed: Duration) {}

    fn thinning_finished(&self, _report: &ThinningReport) {}

    /// Called once, by the boundary that detected the failure.
    fn failed(&self, _stage: Stage, _width: usize, _height: usize, _error: &PipelineError) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Forwards to the `log` facade with `key=value` fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl PipelineObserver for LogObserver {
    fn stage_completed(&self, stage: Stage, width: usize, height: usize, elapsed: Duration) {
        debug!(
            "stage={stage} width={width} height={height} elapsed_ms={:.3}",
            elapsed.as_secs_f64() * 1e3
        );
    }

    fn thinning_finished(&self, report: &ThinningReport) {
        info!(
            "stage=thin passes={} removed={}",
            report.passes, report.removed
        );
    }

    fn failed(&self, stage: Stage, width: usize, height: usize, error: &PipelineError) {
        error!("stage={stage} width={width} height={height} error={error}");
    }
}
