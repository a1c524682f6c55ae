//! Metrics observer hook.
//!
//! Applications that want latency or size distributions for comparisons
//! install a [`DiffMetrics`] implementation once at startup. No exporter is
//! bundled; without a recorder the hook costs one read-lock per comparison.

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

use crate::error::DiffError;

/// Sizes describing one aligned comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonStats {
    pub tokens_a: usize,
    pub tokens_b: usize,
    pub lcs_len: usize,
}

/// Metrics observer for comparisons.
pub trait DiffMetrics: Send + Sync {
    /// Called after an LCS table was built and the comparison finished.
    fn record_comparison(&self, latency: Duration, stats: ComparisonStats);
    /// Called when a configured engine refused a comparison.
    fn record_rejected(&self, error: &DiffError);
}

/// Install or clear the global diff metrics recorder.
pub fn set_diff_metrics(recorder: Option<Arc<dyn DiffMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn DiffMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn DiffMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn DiffMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Timer for one comparison, present only while a recorder is installed.
pub(crate) struct MetricsSpan {
    recorder: Arc<dyn DiffMetrics>,
    start: Instant,
}

impl MetricsSpan {
    pub(crate) fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    pub(crate) fn record_comparison(self, stats: ComparisonStats) {
        self.recorder
            .record_comparison(self.start.elapsed(), stats);
    }
}

pub(crate) fn record_rejected(error: &DiffError) {
    if let Some(recorder) = metrics_recorder() {
        recorder.record_rejected(error);
    }
}
