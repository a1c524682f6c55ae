//! Per-side reconstruction of an alignment from an [`LcsTable`].
//!
//! Each side is reconstructed independently from the same table. The walk
//! starts at `(|A|, |B|)` and ends at `(0, 0)`. On a tie between dropping a
//! token from `A` or from `B`, the side being reconstructed consumes its own
//! token first, so side A and side B can settle on different (equally long)
//! alignments.

use serde::{Deserialize, Serialize};

use crate::table::LcsTable;

/// Whether a token takes part in the common subsequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Same,
    Different,
}

/// Which input sequence is being reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

/// A token position on the reconstructed side and the tag it received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedIndex {
    pub index: usize,
    pub tag: Tag,
}

/// Walks `table` back from the bottom-right cell and tags every item of the
/// requested side.
///
/// The result lists each index of that side exactly once, in ascending
/// order. Items of the other side are skipped without being emitted.
///
/// `table` must have been built from `a` and `b`.
///
/// ```
/// use align::{backtrack, LcsTable, Side, Tag};
///
/// let a = ["私は", " ", "Rust"];
/// let b = ["私は", " ", "Go"];
/// let table = LcsTable::build(&a, &b);
///
/// let tags: Vec<Tag> = backtrack(&table, &a, &b, Side::A)
///     .into_iter()
///     .map(|t| t.tag)
///     .collect();
/// assert_eq!(tags, [Tag::Same, Tag::Same, Tag::Different]);
/// ```
pub fn backtrack<T: PartialEq>(table: &LcsTable, a: &[T], b: &[T], side: Side) -> Vec<TaggedIndex> {
    debug_assert_eq!(table.rows(), a.len() + 1, "table rows do not match A");
    debug_assert_eq!(table.cols(), b.len() + 1, "table cols do not match B");

    let mut out = Vec::with_capacity(match side {
        Side::A => a.len(),
        Side::B => b.len(),
    });
    let (mut i, mut j) = (a.len(), b.len());

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && is_diagonal_match(table, a, b, i, j) {
            let index = match side {
                Side::A => i - 1,
                Side::B => j - 1,
            };
            out.push(TaggedIndex {
                index,
                tag: Tag::Same,
            });
            i -= 1;
            j -= 1;
            continue;
        }

        match side {
            Side::A => {
                if i > 0 && (j == 0 || table.get(i - 1, j) >= table.get(i, j - 1)) {
                    out.push(TaggedIndex {
                        index: i - 1,
                        tag: Tag::Different,
                    });
                    i -= 1;
                } else {
                    j -= 1;
                }
            }
            Side::B => {
                if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
                    out.push(TaggedIndex {
                        index: j - 1,
                        tag: Tag::Different,
                    });
                    j -= 1;
                } else {
                    i -= 1;
                }
            }
        }
    }

    // The walk runs right to left.
    out.reverse();
    out
}

/// A diagonal move is taken only when the items are equal and the cell could
/// not have been reached from its upper or left neighbour.
#[inline]
fn is_diagonal_match<T: PartialEq>(table: &LcsTable, a: &[T], b: &[T], i: usize, j: usize) -> bool {
    let here = table.get(i, j);
    a[i - 1] == b[j - 1]
        && here == table.get(i - 1, j - 1) + 1
        && here > table.get(i - 1, j)
        && here > table.get(i, j - 1)
}
