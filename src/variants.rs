//! Side-by-side comparison of several variants of one section.
//!
//! Each variant is scored by its average difference rate against every
//! other variant and highlighted against the first other variant, which is
//! how a set of generated alternatives is presented for review.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, Level};

use crate::engine::{compute_difference_rate, DiffEngine};
use crate::error::DiffError;
use crate::rate::round_half_up_ratio;
use crate::segment::Segment;

/// How one variant relates to the rest of its group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantReport {
    /// Position of the variant in the input slice.
    pub index: usize,
    /// Mean difference rate against all other variants, rounded half up.
    /// 0 when the variant has no peers.
    pub average_rate: u8,
    /// This variant's segments against the first other variant, or `None`
    /// when there is no other variant.
    pub highlight: Option<Vec<Segment>>,
}

/// Mean of [`compute_difference_rate`] between `content` and each of
/// `others`, rounded half up. 0 when `others` is empty.
///
/// ```
/// use variant_diff::average_difference_rate;
///
/// assert_eq!(average_difference_rate("a", &[]), 0);
/// assert_eq!(average_difference_rate("a", &["a", ""]), 50);
/// ```
pub fn average_difference_rate(content: &str, others: &[&str]) -> u8 {
    if others.is_empty() {
        return 0;
    }
    let sum: u128 = others
        .iter()
        .map(|other| u128::from(compute_difference_rate(content, other)))
        .sum();
    round_half_up_ratio(sum, others.len() as u128)
}

impl DiffEngine {
    /// Configured counterpart of [`average_difference_rate`].
    pub fn average_difference_rate(&self, content: &str, others: &[&str]) -> Result<u8, DiffError> {
        if others.is_empty() {
            return Ok(0);
        }
        let rates = self.map_maybe_parallel(others, |other| self.difference_rate(content, other))?;
        let sum: u128 = rates.into_iter().map(u128::from).sum();
        Ok(round_half_up_ratio(sum, others.len() as u128))
    }

    /// Symmetric matrix of pairwise difference rates with a zero diagonal.
    ///
    /// Each unordered pair is compared once.
    pub fn rate_matrix(&self, variants: &[&str]) -> Result<Vec<Vec<u8>>, DiffError> {
        let n = variants.len();
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();

        let rates =
            self.map_maybe_parallel(&pairs, |&(i, j)| self.difference_rate(variants[i], variants[j]))?;

        let mut matrix = vec![vec![0u8; n]; n];
        for (&(i, j), rate) in pairs.iter().zip(rates) {
            matrix[i][j] = rate;
            matrix[j][i] = rate;
        }
        Ok(matrix)
    }

    /// One [`VariantReport`] per variant, in input order.
    pub fn compare_variants(&self, variants: &[&str]) -> Result<Vec<VariantReport>, DiffError> {
        let span = tracing::span!(
            Level::DEBUG,
            "variant_diff.compare_variants",
            variants = variants.len(),
            parallel = self.config.use_parallel
        );
        let _guard = span.enter();

        let n = variants.len();
        let matrix = self.rate_matrix(variants)?;

        let indices: Vec<usize> = (0..n).collect();
        let highlights = self.map_maybe_parallel(&indices, |&i| {
            match (0..n).find(|&j| j != i) {
                Some(other) => Ok(Some(self.segments(variants[i], variants[other])?.segments_a)),
                None => Ok(None),
            }
        })?;

        let reports: Vec<VariantReport> = highlights
            .into_iter()
            .enumerate()
            .map(|(index, highlight)| {
                let average_rate = if n > 1 {
                    let sum: u128 = matrix[index]
                        .iter()
                        .enumerate()
                        .filter(|&(j, _)| j != index)
                        .map(|(_, &rate)| u128::from(rate))
                        .sum();
                    round_half_up_ratio(sum, (n - 1) as u128)
                } else {
                    0
                };
                VariantReport {
                    index,
                    average_rate,
                    highlight,
                }
            })
            .collect();

        debug!(variants = n, "compare_variants_complete");
        Ok(reports)
    }

    /// Maps `items` in order, on the rayon pool when `use_parallel` is set.
    fn map_maybe_parallel<T, R, F>(&self, items: &[T], f: F) -> Result<Vec<R>, DiffError>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> Result<R, DiffError> + Sync + Send,
    {
        if self.config.use_parallel {
            items.par_iter().map(f).collect()
        } else {
            items.iter().map(f).collect()
        }
    }
}
