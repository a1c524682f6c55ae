//! The global metrics hook sees every aligned comparison and every rejection.
//!
//! Kept to a single test: the recorder is process-global.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use variant_diff::{
    compute_difference_rate, set_diff_metrics, ComparisonStats, DiffConfig, DiffEngine, DiffError,
    DiffMetrics,
};

#[derive(Default)]
struct Recorder {
    comparisons: Mutex<Vec<ComparisonStats>>,
    rejected: AtomicUsize,
}

impl DiffMetrics for Recorder {
    fn record_comparison(&self, _latency: Duration, stats: ComparisonStats) {
        self.comparisons.lock().unwrap().push(stats);
    }

    fn record_rejected(&self, error: &DiffError) {
        assert!(matches!(error, DiffError::InputTooLarge { .. }));
        self.rejected.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn recorder_observes_comparisons() {
    let recorder = Arc::new(Recorder::default());
    set_diff_metrics(Some(recorder.clone()));

    assert_eq!(compute_difference_rate("a b", "a c"), 33);
    // Empty sides skip the table and are not recorded.
    assert_eq!(compute_difference_rate("", "a"), 100);

    let engine =
        DiffEngine::new(DiffConfig::new().with_max_table_cells(Some(4))).expect("valid config");
    assert!(engine.compare("a b", "a b").is_err());

    set_diff_metrics(None);
    assert_eq!(compute_difference_rate("x", "y"), 100);

    let comparisons = recorder.comparisons.lock().unwrap();
    assert_eq!(
        *comparisons,
        vec![ComparisonStats {
            tokens_a: 3,
            tokens_b: 3,
            lcs_len: 2,
        }]
    );
    assert_eq!(recorder.rejected.load(Ordering::SeqCst), 1);
}
