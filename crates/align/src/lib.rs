//! Token alignment for the variant diff engine.
//!
//! Two pieces, both pure:
//!
//! 1. [`LcsTable::build`] computes the full longest-common-subsequence grid
//!    for two token sequences.
//! 2. [`backtrack`] reads that grid once per side and tags every token of the
//!    side as [`Tag::Same`] or [`Tag::Different`].
//!
//! The table is built once and only ever borrowed, so both reconstructions
//! and any rate computation share it without copying.
//!
//! Items are compared with `PartialEq`; callers choose what they compare
//! (raw token text, normalized keys, ...).

mod backtrack;
mod table;

pub use crate::backtrack::{backtrack, Side, Tag, TaggedIndex};
pub use crate::table::LcsTable;
