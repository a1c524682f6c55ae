use thiserror::Error;

/// Errors returned by a configured [`DiffEngine`](crate::DiffEngine).
///
/// The plain [`compute_segments`](crate::compute_segments) and
/// [`compute_difference_rate`](crate::compute_difference_rate) functions are
/// total and never produce one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(
        "comparison of {tokens_a} x {tokens_b} tokens exceeds the table limit of {limit} cells"
    )]
    InputTooLarge {
        tokens_a: usize,
        tokens_b: usize,
        limit: usize,
    },
}
