//! Thread-safety tests: engines and free functions shared across threads.

use std::sync::Arc;
use std::thread;

use variant_diff::{
    compute_difference_rate, compute_segments, DiffConfig, DiffEngine, DiffSegments,
};

const LEFT: &str = "【職務要約】\nWebアプリ開発に5年従事。Rust と TypeScript を担当。";
const RIGHT: &str = "【職務要約】\nWebサービス開発に6年従事。Go と TypeScript を担当。";

#[test]
fn concurrent_free_functions_agree() {
    let expected_segments = compute_segments(LEFT, RIGHT);
    let expected_rate = compute_difference_rate(LEFT, RIGHT);

    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| (compute_segments(LEFT, RIGHT), compute_difference_rate(LEFT, RIGHT))))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (segments, rate) = handle.join().unwrap();
        assert_eq!(segments, expected_segments, "thread {i} produced different segments");
        assert_eq!(rate, expected_rate, "thread {i} produced different rate");
    }
}

#[test]
fn shared_engine_across_threads() {
    let engine = Arc::new(
        DiffEngine::new(
            DiffConfig::new()
                .with_normalize_unicode(true)
                .with_max_table_cells(Some(1_000_000)),
        )
        .expect("valid config"),
    );

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let suffix = format!(" 案{}", i % 2);
                let a = format!("{LEFT}{suffix}");
                engine.compare(&a, RIGHT).expect("within limit")
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    // Threads with the same input parity saw identical inputs.
    for (i, result) in results.iter().enumerate().skip(2) {
        let reference = &results[i % 2];
        assert_eq!(result, reference, "thread {i} diverged from thread {}", i % 2);
    }
}

#[test]
fn parallel_variant_comparison_from_many_threads() {
    let engine = Arc::new(DiffEngine::new(DiffConfig::new().with_parallel(true)).expect("valid"));
    let variants = Arc::new(vec![
        "私は エンジニア です".to_string(),
        "私は マネージャー です".to_string(),
        "私は デザイナー です".to_string(),
    ]);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let variants = Arc::clone(&variants);
            thread::spawn(move || {
                let refs: Vec<&str> = variants.iter().map(String::as_str).collect();
                engine.rate_matrix(&refs).expect("no limit configured")
            })
        })
        .collect();

    for handle in handles {
        let matrix = handle.join().unwrap();
        assert_eq!(matrix, vec![vec![0, 20, 20], vec![20, 0, 20], vec![20, 20, 0]]);
    }
}

#[test]
fn outputs_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DiffEngine>();
    assert_send_sync::<DiffSegments>();
    assert_send_sync::<DiffConfig>();
}
