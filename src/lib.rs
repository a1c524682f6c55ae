//! Token-level text comparison for generated document variants.
//!
//! This crate stitches together the tokenizer and the aligner so callers can
//! compare two texts with a single call:
//!
//! - [`compute_segments`] renders both texts as runs of
//!   [`Tag::Same`] / [`Tag::Different`] segments
//! - [`compute_difference_rate`] returns the share (0..=100) of tokens not in
//!   the longest common token subsequence
//!
//! Texts may mix Japanese and English freely. CJK runs and ASCII
//! alphanumeric runs are compared as whole tokens; whitespace and
//! punctuation compare character by character.
//!
//! ## Pure function guarantee
//!
//! No I/O, no shared mutable state, no caching. The same inputs always give
//! the same output, and concurrent calls need no coordination. Cost is
//! O(|A|·|B|) in tokens for both time and memory; [`DiffConfig::max_table_cells`]
//! bounds it when inputs are untrusted.
//!
//! ```
//! use variant_diff::{compute_difference_rate, compute_segments, Tag};
//!
//! let a = "職務経験: Rust 5年";
//! let b = "職務経験: Go 5年";
//!
//! let diff = compute_segments(a, b);
//! let changed: Vec<&str> = diff
//!     .segments_a
//!     .iter()
//!     .filter(|s| s.tag == Tag::Different)
//!     .map(|s| s.text.as_str())
//!     .collect();
//! assert_eq!(changed, ["Rust"]);
//!
//! assert_eq!(compute_difference_rate(a, b), 14);
//! ```

mod config;
mod engine;
mod error;
mod keys;
mod metrics;
mod rate;
mod segment;
mod variants;

pub use align::{backtrack, LcsTable, Side, Tag, TaggedIndex};
pub use tokenize::{classify, tokenize, Token, TokenClass};

pub use crate::config::{ConfigLoadError, DiffConfig};
pub use crate::engine::{compute_difference_rate, compute_segments, Comparison, DiffEngine};
pub use crate::error::DiffError;
pub use crate::metrics::{set_diff_metrics, ComparisonStats, DiffMetrics};
pub use crate::rate::difference_rate;
pub use crate::segment::{build_segments, DiffSegments, Segment};
pub use crate::variants::{average_difference_rate, VariantReport};
