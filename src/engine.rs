//! Comparison entry points.
//!
//! [`compute_segments`] and [`compute_difference_rate`] are the total,
//! configuration-free interface. [`DiffEngine`] adds the optional behaviour
//! of [`DiffConfig`] and therefore returns `Result`.

use std::time::Instant;

use align::{backtrack, LcsTable, Side, Tag};
use serde::{Deserialize, Serialize};
use tokenize::{tokenize, Token};
use tracing::{debug, warn, Level};

use crate::config::DiffConfig;
use crate::error::DiffError;
use crate::keys::intern_pair;
use crate::metrics::{record_rejected, ComparisonStats, MetricsSpan};
use crate::rate::difference_rate;
use crate::segment::{build_segments, DiffSegments, Segment};

/// Segments and difference rate derived from one alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub segments: DiffSegments,
    pub difference_rate: u8,
}

/// Tags both texts token by token and merges the result into segments.
///
/// Never fails. If one text is empty the other becomes a single `Different`
/// segment; if both are empty both lists are empty. Concatenating the
/// segments of a side always reproduces that side's text.
///
/// ```
/// use variant_diff::{compute_segments, Tag};
///
/// let diff = compute_segments("私は Rust が好き", "私は Go が好き");
/// assert_eq!(diff.segments_a[0].text, "私は ");
/// assert_eq!(diff.segments_a[0].tag, Tag::Same);
/// assert_eq!(diff.segments_a[1].text, "Rust");
/// assert_eq!(diff.segments_a[1].tag, Tag::Different);
/// ```
pub fn compute_segments(a: &str, b: &str) -> DiffSegments {
    if let Some(segments) = trivial_segments(a, b) {
        return segments;
    }
    Aligned::new(tokenize(a), tokenize(b), false).segments()
}

/// Percentage (0..=100) of tokens, relative to the longer text, that are
/// not part of the longest common token subsequence.
///
/// Never fails. Symmetric in its arguments.
///
/// ```
/// use variant_diff::compute_difference_rate;
///
/// assert_eq!(compute_difference_rate("", ""), 0);
/// assert_eq!(compute_difference_rate("a", ""), 100);
/// assert_eq!(compute_difference_rate("same text", "same text"), 0);
/// ```
pub fn compute_difference_rate(a: &str, b: &str) -> u8 {
    if let Some(rate) = trivial_rate(a, b) {
        return rate;
    }
    Aligned::new(tokenize(a), tokenize(b), false).difference_rate()
}

/// A validated [`DiffConfig`] bound to the comparison operations.
///
/// The engine holds no per-call state; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    pub(crate) config: DiffConfig,
}

impl DiffEngine {
    /// Validate `config` and build an engine from it.
    pub fn new(config: DiffConfig) -> Result<Self, DiffError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Configured counterpart of [`compute_segments`].
    pub fn segments(&self, a: &str, b: &str) -> Result<DiffSegments, DiffError> {
        if let Some(segments) = trivial_segments(a, b) {
            return Ok(segments);
        }
        Ok(self.align(a, b)?.segments())
    }

    /// Configured counterpart of [`compute_difference_rate`].
    pub fn difference_rate(&self, a: &str, b: &str) -> Result<u8, DiffError> {
        if let Some(rate) = trivial_rate(a, b) {
            return Ok(rate);
        }
        Ok(self.align(a, b)?.difference_rate())
    }

    /// Segments and rate from a single tokenization and table.
    pub fn compare(&self, a: &str, b: &str) -> Result<Comparison, DiffError> {
        if let (Some(segments), Some(difference_rate)) = (trivial_segments(a, b), trivial_rate(a, b))
        {
            return Ok(Comparison {
                segments,
                difference_rate,
            });
        }
        let aligned = self.align(a, b)?;
        Ok(Comparison {
            segments: aligned.segments(),
            difference_rate: aligned.difference_rate(),
        })
    }

    fn align(&self, a: &str, b: &str) -> Result<Aligned, DiffError> {
        let tokens_a = tokenize(a);
        let tokens_b = tokenize(b);
        self.check_table_limit(tokens_a.len(), tokens_b.len())?;
        Ok(Aligned::new(tokens_a, tokens_b, self.config.normalize_unicode))
    }

    fn check_table_limit(&self, tokens_a: usize, tokens_b: usize) -> Result<(), DiffError> {
        let Some(limit) = self.config.max_table_cells else {
            return Ok(());
        };
        match LcsTable::cell_count(tokens_a, tokens_b) {
            Some(cells) if cells <= limit => Ok(()),
            _ => {
                let err = DiffError::InputTooLarge {
                    tokens_a,
                    tokens_b,
                    limit,
                };
                warn!(tokens_a, tokens_b, limit, error = %err, "compare_rejected");
                record_rejected(&err);
                Err(err)
            }
        }
    }
}

/// Result for inputs where at least one side is empty; no table is built.
fn trivial_segments(a: &str, b: &str) -> Option<DiffSegments> {
    let whole = |text: &str| {
        vec![Segment {
            text: text.to_string(),
            tag: Tag::Different,
        }]
    };
    match (a.is_empty(), b.is_empty()) {
        (false, false) => None,
        (true, true) => Some(DiffSegments::default()),
        (true, false) => Some(DiffSegments {
            segments_a: Vec::new(),
            segments_b: whole(b),
        }),
        (false, true) => Some(DiffSegments {
            segments_a: whole(a),
            segments_b: Vec::new(),
        }),
    }
}

fn trivial_rate(a: &str, b: &str) -> Option<u8> {
    match (a.is_empty(), b.is_empty()) {
        (false, false) => None,
        (true, true) => Some(0),
        _ => Some(100),
    }
}

/// Both token sequences plus the LCS table built over their keys.
///
/// The table is built once and borrowed by both side reconstructions and by
/// the rate calculation.
struct Aligned {
    tokens_a: Vec<Token>,
    tokens_b: Vec<Token>,
    ids_a: Vec<u32>,
    ids_b: Vec<u32>,
    table: LcsTable,
}

impl Aligned {
    fn new(tokens_a: Vec<Token>, tokens_b: Vec<Token>, normalize: bool) -> Self {
        let metrics = MetricsSpan::start();
        let start = Instant::now();
        let span = tracing::span!(
            Level::DEBUG,
            "variant_diff.align",
            tokens_a = tokens_a.len(),
            tokens_b = tokens_b.len(),
            normalize
        );
        let _guard = span.enter();

        let (ids_a, ids_b) = intern_pair(&tokens_a, &tokens_b, normalize);
        let table = LcsTable::build(&ids_a, &ids_b);

        let stats = ComparisonStats {
            tokens_a: tokens_a.len(),
            tokens_b: tokens_b.len(),
            lcs_len: table.lcs_len(),
        };
        debug!(
            lcs_len = stats.lcs_len,
            elapsed_micros = start.elapsed().as_micros(),
            "align_complete"
        );
        if let Some(span) = metrics {
            span.record_comparison(stats);
        }

        Self {
            tokens_a,
            tokens_b,
            ids_a,
            ids_b,
            table,
        }
    }

    fn side_segments(&self, side: Side) -> Vec<Segment> {
        let tokens = match side {
            Side::A => &self.tokens_a,
            Side::B => &self.tokens_b,
        };
        let tagged = backtrack(&self.table, &self.ids_a, &self.ids_b, side);
        build_segments(
            tagged
                .into_iter()
                .map(|t| (tokens[t.index].text.as_str(), t.tag)),
        )
    }

    fn segments(&self) -> DiffSegments {
        DiffSegments {
            segments_a: self.side_segments(Side::A),
            segments_b: self.side_segments(Side::B),
        }
    }

    fn difference_rate(&self) -> u8 {
        difference_rate(self.tokens_a.len(), self.tokens_b.len(), &self.table)
    }
}
